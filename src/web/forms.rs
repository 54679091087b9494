use serde::Deserialize;

use crate::models::{
    BrochureInput, LeadCreate, LeadStatus, PortfolioInput, ProductInput, SeoInput,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

/// `?error=` carried through the POST-redirect-GET cycle on admin screens.
#[derive(Deserialize)]
pub struct ErrorQuery {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Name and email are required");
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address");
        }
        if self.message.trim().is_empty() {
            return Err("Please tell us a little about your project");
        }
        Ok(())
    }

    pub fn into_lead(self) -> LeadCreate {
        LeadCreate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct ProductForm {
    pub category: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// Comma-separated in the form, a JSON array on the wire.
    pub features: Option<String>,
}

impl ProductForm {
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            category: self.category,
            name: self.name,
            description: self.description,
            image: none_if_blank(self.image),
            features: self.features.as_deref().and_then(split_csv),
        }
    }
}

#[derive(Deserialize)]
pub struct PortfolioForm {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub client: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

impl PortfolioForm {
    pub fn into_input(self) -> PortfolioInput {
        PortfolioInput {
            title: self.title,
            description: none_if_blank(self.description),
            image: none_if_blank(self.image),
            client: none_if_blank(self.client),
            location: none_if_blank(self.location),
            category: none_if_blank(self.category),
        }
    }
}

#[derive(Deserialize)]
pub struct BrochureForm {
    pub title: String,
    pub description: String,
    pub pdf_path: String,
}

impl BrochureForm {
    pub fn into_input(self) -> BrochureInput {
        BrochureInput {
            title: self.title,
            description: self.description,
            pdf_path: self.pdf_path,
        }
    }
}

#[derive(Deserialize)]
pub struct SeoForm {
    pub page: String,
    pub title: String,
    pub description: String,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub keywords: Option<String>,
}

impl SeoForm {
    pub fn into_input(self) -> SeoInput {
        SeoInput {
            page: self.page,
            title: self.title,
            description: self.description,
            og_title: none_if_blank(self.og_title),
            og_description: none_if_blank(self.og_description),
            keywords: self.keywords.as_deref().and_then(split_csv),
        }
    }
}

#[derive(Deserialize)]
pub struct LeadStatusForm {
    pub status: LeadStatus,
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn split_csv(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

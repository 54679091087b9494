use askama::Template;

use crate::models::{
    AnalyticsStats, Brochure, Lead, LeadStatus, PortfolioItem, Product, SeoRecord, SessionRecord,
};

/// Head metadata for a public page, either loaded from the remote SEO store
/// or built from the per-page defaults.
#[derive(Clone, Debug)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
}

impl PageMeta {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            og_title: title.to_string(),
            og_description: description.to_string(),
        }
    }

    pub fn from_record(record: SeoRecord) -> Self {
        let og_title = record.og_title.unwrap_or_else(|| record.title.clone());
        let og_description = record
            .og_description
            .unwrap_or_else(|| record.description.clone());
        Self {
            title: record.title,
            description: record.description,
            og_title,
            og_description,
        }
    }
}

// Public pages

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    pub products: Vec<Product>,
    pub portfolio: Vec<PortfolioItem>,
    pub degraded: bool,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "public/services.html")]
pub struct ServicesTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "public/process.html")]
pub struct ProcessTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "public/why_choose_us.html")]
pub struct WhyChooseUsTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "public/products.html")]
pub struct ProductsTemplate {
    pub meta: PageMeta,
    pub products: Vec<Product>,
    pub degraded: bool,
}

#[derive(Template)]
#[template(path = "public/portfolio.html")]
pub struct PortfolioTemplate {
    pub meta: PageMeta,
    pub items: Vec<PortfolioItem>,
    pub degraded: bool,
}

#[derive(Template)]
#[template(path = "public/brochures.html")]
pub struct BrochuresTemplate {
    pub meta: PageMeta,
    pub brochures: Vec<Brochure>,
    pub degraded: bool,
}

#[derive(Template)]
#[template(path = "public/social_reviews.html")]
pub struct SocialReviewsTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct ContactTemplate {
    pub meta: PageMeta,
    pub submitted: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
}

// Admin pages

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub user: SessionRecord,
    pub stats: AnalyticsStats,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/products.html")]
pub struct AdminProductsTemplate {
    pub user: SessionRecord,
    pub products: Vec<Product>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/portfolio.html")]
pub struct AdminPortfolioTemplate {
    pub user: SessionRecord,
    pub items: Vec<PortfolioItem>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/brochures.html")]
pub struct AdminBrochuresTemplate {
    pub user: SessionRecord,
    pub brochures: Vec<Brochure>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/leads.html")]
pub struct AdminLeadsTemplate {
    pub user: SessionRecord,
    pub leads: Vec<Lead>,
    pub statuses: Vec<LeadStatus>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/seo.html")]
pub struct AdminSeoTemplate {
    pub user: SessionRecord,
    pub records: Vec<SeoRecord>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/analytics.html")]
pub struct AdminAnalyticsTemplate {
    pub user: SessionRecord,
    pub stats: AnalyticsStats,
    pub error: Option<String>,
}

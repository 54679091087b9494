//! Public (unauthenticated) endpoints of the remote content API.

use serde_json::Value;

use crate::api::ApiClient;
use crate::common::ApiError;
use crate::models::{Brochure, Lead, LeadCreate, PortfolioItem, Product, SeoRecord};

impl ApiClient {
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/api/products").await
    }

    pub async fn portfolio(&self) -> Result<Vec<PortfolioItem>, ApiError> {
        self.get("/api/portfolio").await
    }

    pub async fn brochures(&self) -> Result<Vec<Brochure>, ApiError> {
        self.get("/api/brochures").await
    }

    /// SEO metadata for a single public page (`home`, `about`, ...).
    pub async fn seo_for_page(&self, page: &str) -> Result<SeoRecord, ApiError> {
        self.get(&format!("/api/seo/{page}")).await
    }

    /// Submit a contact-form inquiry.
    pub async fn create_lead(&self, lead: &LeadCreate) -> Result<Lead, ApiError> {
        self.post("/api/leads", lead).await
    }

    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get("/health").await
    }
}

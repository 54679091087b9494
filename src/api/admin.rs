//! Admin endpoints of the remote content API.
//!
//! None of these calls carry a credential; the backend trusts the route
//! guard on the frontend alone. Preserved as observed behavior.

use crate::api::ApiClient;
use crate::common::ApiError;
use crate::models::{
    AnalyticsStats, Brochure, BrochureInput, Lead, LeadStatus, LeadStatusUpdate, PortfolioInput,
    PortfolioItem, Product, ProductInput, SeoInput, SeoRecord,
};

impl ApiClient {
    // Products

    pub async fn admin_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/api/admin/products").await
    }

    pub async fn admin_create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.post("/api/admin/products", input).await
    }

    pub async fn admin_update_product(
        &self,
        id: &str,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.put(&format!("/api/admin/products/{id}"), input).await
    }

    pub async fn admin_delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/products/{id}")).await
    }

    // Portfolio

    pub async fn admin_portfolio(&self) -> Result<Vec<PortfolioItem>, ApiError> {
        self.get("/api/admin/portfolio").await
    }

    pub async fn admin_create_portfolio_item(
        &self,
        input: &PortfolioInput,
    ) -> Result<PortfolioItem, ApiError> {
        self.post("/api/admin/portfolio", input).await
    }

    pub async fn admin_update_portfolio_item(
        &self,
        id: &str,
        input: &PortfolioInput,
    ) -> Result<PortfolioItem, ApiError> {
        self.put(&format!("/api/admin/portfolio/{id}"), input).await
    }

    pub async fn admin_delete_portfolio_item(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/portfolio/{id}")).await
    }

    // Brochures

    pub async fn admin_brochures(&self) -> Result<Vec<Brochure>, ApiError> {
        self.get("/api/admin/brochures").await
    }

    pub async fn admin_create_brochure(&self, input: &BrochureInput) -> Result<Brochure, ApiError> {
        self.post("/api/admin/brochures", input).await
    }

    pub async fn admin_update_brochure(
        &self,
        id: &str,
        input: &BrochureInput,
    ) -> Result<Brochure, ApiError> {
        self.put(&format!("/api/admin/brochures/{id}"), input).await
    }

    pub async fn admin_delete_brochure(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/brochures/{id}")).await
    }

    // Leads

    pub async fn admin_leads(&self) -> Result<Vec<Lead>, ApiError> {
        self.get("/api/admin/leads").await
    }

    pub async fn admin_update_lead_status(
        &self,
        id: &str,
        status: LeadStatus,
    ) -> Result<Lead, ApiError> {
        self.put(
            &format!("/api/admin/leads/{id}/status"),
            &LeadStatusUpdate { status },
        )
        .await
    }

    pub async fn admin_delete_lead(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/admin/leads/{id}")).await
    }

    // SEO

    pub async fn admin_seo(&self) -> Result<Vec<SeoRecord>, ApiError> {
        self.get("/api/admin/seo").await
    }

    pub async fn admin_update_seo(&self, page: &str, input: &SeoInput) -> Result<SeoRecord, ApiError> {
        self.put(&format!("/api/admin/seo/{page}"), input).await
    }

    pub async fn admin_upsert_seo(&self, input: &SeoInput) -> Result<SeoRecord, ApiError> {
        self.post("/api/admin/seo/upsert", input).await
    }

    // Analytics

    pub async fn analytics_stats(&self) -> Result<AnalyticsStats, ApiError> {
        self.get("/api/analytics/stats").await
    }
}

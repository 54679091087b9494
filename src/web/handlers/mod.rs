pub mod admin_brochures;
pub mod admin_dashboard;
pub mod admin_leads;
pub mod admin_portfolio;
pub mod admin_products;
pub mod admin_seo;
pub mod auth;
pub mod public;

use actix_web::web;

use crate::web::handlers;

/// Register all routes. The 404 fallback is registered separately in `main`
/// as the default service so it can never shadow a real route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::public::configure(cfg);
    handlers::auth::configure(cfg);
    handlers::admin_dashboard::configure(cfg);
    handlers::admin_products::configure(cfg);
    handlers::admin_portfolio::configure(cfg);
    handlers::admin_brochures::configure(cfg);
    handlers::admin_leads::configure(cfg);
    handlers::admin_seo::configure(cfg);
}

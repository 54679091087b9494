use actix_web::{HttpRequest, Responder, get, web};

use crate::models::AnalyticsStats;

use crate::web::helpers::{render, require_admin};
use crate::web::state::AppState;
use crate::web::templates::{AdminAnalyticsTemplate, AdminDashboardTemplate};

#[get("/admin")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match require_admin(&state.auth, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let (stats, error) = match state.api.analytics_stats().await {
        Ok(stats) => (stats, None),
        Err(e) => (AnalyticsStats::default(), Some(e.user_message())),
    };

    render(AdminDashboardTemplate { user, stats, error })
}

#[get("/admin/analytics")]
pub async fn analytics(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match require_admin(&state.auth, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let (stats, error) = match state.api.analytics_stats().await {
        Ok(stats) => (stats, None),
        Err(e) => (AnalyticsStats::default(), Some(e.user_message())),
    };

    render(AdminAnalyticsTemplate { user, stats, error })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard).service(analytics);
}

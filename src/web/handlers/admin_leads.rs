use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::models::LeadStatus;

use crate::web::forms::{ErrorQuery, LeadStatusForm};
use crate::web::helpers::{render, require_admin};
use crate::web::state::AppState;
use crate::web::templates::AdminLeadsTemplate;

#[get("/admin/leads")]
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ErrorQuery>,
) -> impl Responder {
    let user = match require_admin(&state.auth, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let (leads, error) = match state.api.admin_leads().await {
        Ok(leads) => (leads, query.into_inner().error),
        Err(e) => (Vec::new(), Some(e.user_message())),
    };

    render(AdminLeadsTemplate {
        user,
        leads,
        statuses: LeadStatus::ALL.to_vec(),
        error,
    })
}

#[post("/admin/leads/{id}/status")]
pub async fn update_status(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<LeadStatusForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    let id = path.into_inner();
    if let Err(e) = state.api.admin_update_lead_status(&id, form.status).await {
        log::warn!("lead status update failed for {id}: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

#[post("/admin/leads/{id}/delete")]
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    let id = path.into_inner();
    if let Err(e) = state.api.admin_delete_lead(&id).await {
        log::warn!("lead delete failed for {id}: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/leads"))
        .finish()
}

fn redirect_with_error(message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((
            "Location",
            format!("/admin/leads?error={}", urlencoding::encode(message)),
        ))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(update_status).service(delete);
}

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::web::forms::{ErrorQuery, SeoForm};
use crate::web::helpers::{render, require_admin};
use crate::web::state::AppState;
use crate::web::templates::AdminSeoTemplate;

#[get("/admin/seo")]
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ErrorQuery>,
) -> impl Responder {
    let user = match require_admin(&state.auth, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let (records, error) = match state.api.admin_seo().await {
        Ok(records) => (records, query.into_inner().error),
        Err(e) => (Vec::new(), Some(e.user_message())),
    };

    render(AdminSeoTemplate {
        user,
        records,
        error,
    })
}

/// Create-or-update a page's SEO record from one form.
#[post("/admin/seo")]
pub async fn upsert(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SeoForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    if let Err(e) = state.api.admin_upsert_seo(&form.into_inner().into_input()).await {
        log::warn!("seo upsert failed: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

#[post("/admin/seo/{page}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<SeoForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    let page = path.into_inner();
    if let Err(e) = state
        .api
        .admin_update_seo(&page, &form.into_inner().into_input())
        .await
    {
        log::warn!("seo update failed for page {page}: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/seo"))
        .finish()
}

fn redirect_with_error(message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((
            "Location",
            format!("/admin/seo?error={}", urlencoding::encode(message)),
        ))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(upsert).service(update);
}

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::web::forms::{ErrorQuery, ProductForm};
use crate::web::helpers::{render, require_admin};
use crate::web::state::AppState;
use crate::web::templates::AdminProductsTemplate;

#[get("/admin/products")]
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ErrorQuery>,
) -> impl Responder {
    let user = match require_admin(&state.auth, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let (products, error) = match state.api.admin_products().await {
        Ok(products) => (products, query.into_inner().error),
        Err(e) => (Vec::new(), Some(e.user_message())),
    };

    render(AdminProductsTemplate {
        user,
        products,
        error,
    })
}

#[post("/admin/products")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProductForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    if let Err(e) = state.api.admin_create_product(&form.into_inner().into_input()).await {
        log::warn!("product create failed: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

#[post("/admin/products/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<ProductForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    let id = path.into_inner();
    if let Err(e) = state
        .api
        .admin_update_product(&id, &form.into_inner().into_input())
        .await
    {
        log::warn!("product update failed for {id}: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

#[post("/admin/products/{id}/delete")]
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state.auth, &req) {
        return resp;
    }

    let id = path.into_inner();
    if let Err(e) = state.api.admin_delete_product(&id).await {
        log::warn!("product delete failed for {id}: {e}");
        return redirect_with_error(&e.user_message());
    }
    redirect_to_list()
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/products"))
        .finish()
}

fn redirect_with_error(message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((
            "Location",
            format!("/admin/products?error={}", urlencoding::encode(message)),
        ))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create).service(update).service(delete);
}

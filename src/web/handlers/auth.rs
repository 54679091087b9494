use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{is_htmx, render};
use crate::web::state::AppState;
use crate::web::templates::AdminLoginTemplate;

#[get("/admin/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    // Already signed in: straight to the dashboard.
    if state.auth.is_authenticated() {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/admin"))
            .finish();
    }

    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Username and password are required".to_string(),
        "invalid" => "Invalid username or password".to_string(),
        other => other.to_string(),
    });

    render(AdminLoginTemplate { error })
}

#[post("/admin/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    // Submitted exactly as typed: the credential check is byte-for-byte, so
    // normalizing here would accept pairs the store rejects.
    let username = form.username.as_str();
    let password = form.password.as_str();

    if username.is_empty() || password.is_empty() {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/login?error=missing"))
            .finish();
    }

    // A mismatch is an expected outcome, not an error: the state machine
    // returns false and we bounce back to the form with an inline message.
    if !state.auth.login(username, password) {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/login?error=invalid"))
            .finish();
    }

    // login() applies the transition before returning, so this navigation
    // is guaranteed to pass the guard.
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin"))
        .finish()
}

#[post("/admin/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    state.auth.logout();

    if is_htmx(&req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", "/admin/login"))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/login"))
            .finish()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form).service(login_submit).service(logout);
}

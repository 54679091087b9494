mod common;

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test};

use common::*;

use askama::Template;

use nowest::auth::AuthService;
use nowest::web::routes;
use nowest::web::samples;
use nowest::models::SeoRecord;
use nowest::web::templates::{
    AdminBrochuresTemplate, AdminPortfolioTemplate, AdminProductsTemplate, AdminSeoTemplate,
};

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($state))
                .configure(routes::configure),
        )
        .await
    };
}

fn location(resp: &ServiceResponse) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[actix_web::test]
async fn guard_renders_nothing_and_does_not_redirect_while_loading() {
    let (store, _dir) = temp_store();
    // Deliberately not hydrated: the service is still Loading.
    let auth = Arc::new(AuthService::new(store));
    let app = test_app!(app_state(auth));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(location(&resp), None, "no premature redirect during hydration");

    let body = test::read_body(resp).await;
    assert!(body.is_empty(), "protected subtree must not render");
}

#[actix_web::test]
async fn guard_redirects_unauthenticated_visits_to_login() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    let app = test_app!(app_state(auth));

    for uri in [
        "/admin",
        "/admin/products",
        "/admin/portfolio",
        "/admin/brochures",
        "/admin/leads",
        "/admin/seo",
        "/admin/analytics",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri} must redirect");
        assert_eq!(location(&resp), Some("/admin/login".to_string()));
    }
}

#[actix_web::test]
async fn guard_uses_hx_redirect_for_htmx_requests() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    let app = test_app!(app_state(auth));

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("HX-Request", "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers()
            .get("HX-Redirect")
            .and_then(|v| v.to_str().ok()),
        Some("/admin/login")
    );
}

#[actix_web::test]
async fn login_flow_unlocks_the_admin_panel() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    let app = test_app!(app_state(auth));

    // Bad credentials bounce back to the form with an inline error code.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .set_form([("username", "admin"), ("password", "letmein")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/login?error=invalid".to_string()));

    // Still locked out.
    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // The fixed pair signs in and lands on the dashboard.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .set_form([("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin".to_string()));

    // Guard now renders the protected subtree, no redirect.
    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Dashboard"));
}

#[actix_web::test]
async fn login_page_redirects_when_already_authenticated() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    auth.login(ADMIN_USERNAME, ADMIN_PASSWORD);
    let app = test_app!(app_state(auth));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/admin/login").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin".to_string()));
}

#[actix_web::test]
async fn logout_locks_the_panel_again() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    auth.login(ADMIN_USERNAME, ADMIN_PASSWORD);
    let app = test_app!(app_state(auth));

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/admin/logout").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/login".to_string()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/login".to_string()));
}

#[actix_web::test]
async fn padded_username_is_rejected_as_typed() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    let app = test_app!(app_state(auth));

    // Whitespace is part of the submitted value; "  admin  " is not "admin".
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .set_form([("username", "  admin  "), ("password", ADMIN_PASSWORD)])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/login?error=invalid".to_string()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "panel must stay locked");
}

#[actix_web::test]
async fn missing_credentials_use_the_missing_error_code() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    let app = test_app!(app_state(auth));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .set_form([("username", ""), ("password", "")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/login?error=missing".to_string()));
}

#[actix_web::test]
async fn content_pages_degrade_to_sample_data_when_api_is_down() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    // app_state points the client at an unroutable address.
    let app = test_app!(app_state(auth));

    for uri in ["/", "/products", "/portfolio", "/brochures"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri} must still render");
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(
            body.contains("Showing sample data"),
            "{uri} must carry the sample-data banner"
        );
    }
}

#[::core::prelude::v1::test]
fn admin_lists_offer_an_edit_form_per_row() {
    let body = AdminProductsTemplate {
        user: fixed_record(),
        products: samples::products(),
        error: None,
    }
    .render()
    .unwrap();
    assert!(body.contains(r#"action="/admin/products/sample-roman-blinds""#));

    let body = AdminPortfolioTemplate {
        user: fixed_record(),
        items: samples::portfolio(),
        error: None,
    }
    .render()
    .unwrap();
    assert!(body.contains(r#"action="/admin/portfolio/sample-kensington""#));

    let body = AdminBrochuresTemplate {
        user: fixed_record(),
        brochures: samples::brochures(),
        error: None,
    }
    .render()
    .unwrap();
    assert!(body.contains(r#"action="/admin/brochures/sample-collection""#));
}

#[::core::prelude::v1::test]
fn seo_edit_form_carries_existing_keywords() {
    let record = SeoRecord {
        id: "seo-home".to_string(),
        page: "home".to_string(),
        title: "Nowest Interiors".to_string(),
        description: "Luxury blinds and curtains.".to_string(),
        og_title: None,
        og_description: None,
        keywords: Some(vec!["blinds".to_string(), "curtains".to_string()]),
        updated_at: None,
    };
    let body = AdminSeoTemplate {
        user: fixed_record(),
        records: vec![record],
        error: None,
    }
    .render()
    .unwrap();
    assert!(body.contains(r#"name="keywords" value="blinds, curtains""#));
}

#[actix_web::test]
async fn admin_screens_surface_api_failures_inline() {
    let (store, _dir) = temp_store();
    let auth = Arc::new(AuthService::new(store));
    auth.hydrate().await;
    auth.login(ADMIN_USERNAME, ADMIN_PASSWORD);
    let app = test_app!(app_state(auth));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/admin/products").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("banner-error"), "API failure must show inline");
}

use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::auth::{AuthService, AuthState};
use crate::models::{PageView, SessionRecord};

use crate::web::state::AppState;
use crate::web::templates::PageMeta;

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// Route guard for the admin panel, consulted on every admin request.
///
/// - `Loading`: hydration is still in flight, so render nothing and do NOT
///   redirect (a neutral 503 placeholder);
/// - `Unauthenticated`: redirect to the login entry point and render nothing
///   from the protected subtree;
/// - `Authenticated`: hand the session record to the handler.
pub fn require_admin(
    auth: &AuthService,
    req: &HttpRequest,
) -> Result<SessionRecord, HttpResponse> {
    match auth.snapshot() {
        AuthState::Authenticated(record) => Ok(record),
        AuthState::Loading => Err(HttpResponse::ServiceUnavailable()
            .insert_header(("Retry-After", "1"))
            .finish()),
        AuthState::Unauthenticated => {
            if is_htmx(req) {
                Err(HttpResponse::Unauthorized()
                    .insert_header(("HX-Redirect", "/admin/login"))
                    .finish())
            } else {
                Err(HttpResponse::SeeOther()
                    .insert_header(("Location", "/admin/login"))
                    .finish())
            }
        }
    }
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Fire page-view telemetry for a public page. Never blocks, never fails
/// visibly.
pub fn track_page_view(state: &AppState, req: &HttpRequest, page: &str) {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.api.track_page_view(PageView {
        page: page.to_string(),
        user_agent: header("User-Agent"),
        referrer: header("Referer"),
    });
}

/// Resolve the SEO metadata for a public page, falling back to the built-in
/// defaults when the remote API has no record (or is unreachable).
pub async fn page_meta(state: &AppState, page: &str, fallback: PageMeta) -> PageMeta {
    match state.api.seo_for_page(page).await {
        Ok(record) => PageMeta::from_record(record),
        Err(e) => {
            log::debug!("no SEO record for page {page}: {e}");
            fallback
        }
    }
}

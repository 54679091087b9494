use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use nowest::api::ApiClient;
use nowest::auth::{AuthService, SessionStore};
use nowest::config::AppConfig;
use nowest::web;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    let store = SessionStore::open(&config.data_dir)
        .expect("Failed to open session store (is the data directory writable?)");
    let auth = Arc::new(AuthService::new(store));
    // One-shot hydration of the persisted admin session. The route guard
    // tolerates the Loading state, but in practice nothing observes it
    // because we await the gate before binding.
    auth.hydrate().await;

    let api = ApiClient::new(config.api_base_url.clone());
    let state = Data::new(web::state::AppState { api, auth });

    log::info!(
        "nowest site listening on {} (content API: {})",
        config.bind_addr,
        config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(web::middleware::SecurityHeaders)
            .configure(web::routes::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(actix_web::web::route().to(web::handlers::public::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}

use std::sync::Arc;

use crate::api::ApiClient;
use crate::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub auth: Arc<AuthService>,
}

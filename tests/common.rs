use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use nowest::api::ApiClient;
use nowest::auth::{AuthService, SessionStore};
use nowest::models::SessionRecord;
use nowest::web::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn fixed_record() -> SessionRecord {
    SessionRecord {
        id: "1".to_string(),
        username: "admin".to_string(),
        email: "admin@nowestinterior.com".to_string(),
    }
}

/// A session store rooted in a throwaway directory, plus the guard that keeps
/// the directory alive for the duration of the test.
pub fn temp_store() -> (SessionStore, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let store = SessionStore::open(dir.path()).expect("open session store");
    (store, dir)
}

/// Write raw bytes under the session key, bypassing the store, to simulate
/// corruption or out-of-band writes.
pub fn write_raw_session(dir: &Path, bytes: &[u8]) {
    fs::write(dir.join("admin_user.json"), bytes).expect("write raw session");
}

pub fn session_file_exists(dir: &Path) -> bool {
    dir.join("admin_user.json").exists()
}

/// App state against an unroutable API base URL: every remote call fails,
/// exercising the fallback paths without any network dependency.
pub fn app_state(auth: Arc<AuthService>) -> AppState {
    AppState {
        api: ApiClient::new("http://127.0.0.1:1"),
        auth,
    }
}

use std::path::PathBuf;

/// Runtime configuration, collected from the environment once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the remote content API.
    pub api_base_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Directory holding durable state (the persisted admin session).
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("NOWEST_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8001".to_string());
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let data_dir = std::env::var("NOWEST_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self {
            api_base_url,
            bind_addr,
            data_dir,
        }
    }
}

//! Page-view telemetry: fire-and-forget, never user-visible.

use std::time::Duration;

use crate::api::ApiClient;
use crate::models::PageView;

const TELEMETRY_TIMEOUT: Duration = Duration::from_secs(5);

impl ApiClient {
    /// Record a page view without blocking the request that triggered it.
    ///
    /// The send runs on a detached task with a hard 5-second cap. Failures
    /// and timeouts are swallowed (logged at debug level) so telemetry can
    /// never disturb page rendering.
    pub fn track_page_view(&self, view: PageView) {
        let client = self.clone();
        tokio::spawn(async move {
            let send = client.post::<serde_json::Value, _>("/api/pageview", &view);
            match tokio::time::timeout(TELEMETRY_TIMEOUT, send).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => log::debug!("page view tracking failed: {e}"),
                Err(_) => log::debug!("page view tracking timed out"),
            }
        });
    }
}

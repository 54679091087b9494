use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for the fire-and-forget page-view telemetry endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    pub page: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
}

/// A stored page view as returned inside analytics responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageViewRecord {
    pub id: String,
    pub page: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPage {
    pub page: String,
    pub count: i64,
}

/// Dashboard statistics from `GET /api/analytics/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsStats {
    pub total_products: i64,
    pub total_portfolio: i64,
    pub new_leads: i64,
    pub total_page_views: i64,
    pub page_views_30_days: i64,
    pub unique_visitors: i64,
    pub top_pages: Vec<TopPage>,
    pub recent_activity: Vec<PageViewRecord>,
}

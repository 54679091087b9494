use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A downloadable PDF brochure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brochure {
    pub id: String,
    pub title: String,
    pub description: String,
    pub pdf_path: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrochureInput {
    pub title: String,
    pub description: String,
    pub pdf_path: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogue product (blinds, curtains, commercial furnishings) as served by
/// the remote API. Treated as an opaque payload beyond `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload for the admin product endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub category: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

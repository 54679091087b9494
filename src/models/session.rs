use serde::{Deserialize, Serialize};

/// The durable representation of "who is logged in".
///
/// Exactly these three fields are ever written to storage; a record is either
/// fully present or absent, never partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub username: String,
    pub email: String,
}

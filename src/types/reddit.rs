//! Reddit profile payload for `/api/reddit`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditProfile {
    pub username: String,
    #[serde(default)]
    pub karma: i64,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub posts: Vec<serde_json::Value>,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
}

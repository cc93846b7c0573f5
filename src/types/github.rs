//! GitHub profile payload for `/api/github-osint`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubProfile {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    #[serde(default)]
    pub repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
    #[serde(default)]
    pub repositories: Vec<serde_json::Value>,
    #[serde(default)]
    pub organizations: Vec<serde_json::Value>,
}

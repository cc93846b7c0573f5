//! Domain search payload for `/api/domain`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainResult {
    pub search_term: String,
    pub results: DomainMatches,
    pub source: String,
    #[serde(default)]
    pub response_time: f64,
}

/// Credential material associated with the searched domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainMatches {
    #[serde(default)]
    pub emails: Vec<DomainEmailEntry>,
    #[serde(default)]
    pub domains: Vec<DomainEntry>,
    #[serde(default)]
    pub urls: Vec<DomainUrlEntry>,
    #[serde(default)]
    pub subdomains: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEmailEntry {
    pub email: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEntry {
    pub domain: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainUrlEntry {
    pub url: String,
}

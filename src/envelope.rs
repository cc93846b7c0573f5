//! The uniform response envelope returned by query-taking endpoints.

use serde::{Deserialize, Serialize};

/// Wrapper every query-taking endpoint returns: `{success, data?, error?, _meta?}`.
///
/// A 2xx response is returned to the caller verbatim, including bodies with
/// `success: false` — a remote-reported failure inside a successful round
/// trip is data, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct OsintResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// Plan / quota metadata attached to envelope responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub plan: String,
    pub lookups_left: LookupsLeft,
}

/// Remaining-lookup counter; the server sends either a number or a string
/// such as `"unlimited"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupsLeft {
    Count(u64),
    Text(String),
}

impl std::fmt::Display for LookupsLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupsLeft::Count(n) => write!(f, "{}", n),
            LookupsLeft::Text(s) => f.write_str(s),
        }
    }
}

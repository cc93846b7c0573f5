//! Account information payload for `/api/user`.

use serde::{Deserialize, Serialize};

/// Account details and usage counters for the authenticated key.
///
/// Unlike every other endpoint, `/api/user` returns this record directly
/// rather than wrapped in an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub account_info: AccountInfo,
    pub usage: Usage,
    pub note: String,
    pub last_limit_reset: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub email: String,
    pub member_since: String,
    pub plan: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub api: ApiUsage,
    pub dashboard: DashboardUsage,
}

/// Daily API quota counters. The server reports these as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUsage {
    pub request_limit_daily: String,
    pub requests_made_today: String,
    pub requests_remaining_today: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardUsage {
    pub request_limit_daily: String,
    pub requests_remaining_today: String,
}

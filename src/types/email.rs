//! Email lookup payload for `/api/email-osint`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResult {
    pub email: String,
    pub is_valid: bool,
    pub is_disposable: bool,
    pub is_role_account: bool,
    pub is_free: bool,
    pub domain: String,
}

//! Phone lookup payload for `/api/phone-osint`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneResult {
    pub number: String,
    pub country: Option<String>,
    pub location: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
    pub is_valid: bool,
}

//! Chilean name search payload for `/api/chilean-name`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChileanNameResult {
    pub name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Chilean national id (Rol Único Tributario).
    pub rut: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

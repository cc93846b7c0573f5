//! Minecraft breach payload for `/api/minecraft`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinecraftResult {
    #[serde(default)]
    pub breach_results: Vec<MinecraftBreachEntry>,
    #[serde(default)]
    pub elapsed_ms: u64,
    pub note: Option<String>,
    pub query: String,
    #[serde(default)]
    pub results: u64,
    pub status: String,
}

/// A raw combolist line and the dump it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinecraftBreachEntry {
    pub line: String,
    pub source: String,
}

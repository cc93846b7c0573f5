//! IP geolocation payload for `/api/ip`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLookupResult {
    pub ip: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    /// Autonomous system, e.g. `"AS13335 Cloudflare, Inc."`.
    #[serde(rename = "as")]
    pub autonomous_system: Option<String>,
    pub query: Option<String>,
}

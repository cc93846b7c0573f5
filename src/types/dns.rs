//! DNS resolution payload for `/api/dns-resolver`.

use serde::{Deserialize, Serialize};

/// Records keyed by type; absent types were not found for the domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsResult {
    #[serde(rename = "A", default)]
    pub a: Option<Vec<String>>,
    #[serde(rename = "AAAA", default)]
    pub aaaa: Option<Vec<String>>,
    #[serde(rename = "CNAME", default)]
    pub cname: Option<Vec<String>>,
    #[serde(rename = "MX", default)]
    pub mx: Option<Vec<MxRecord>>,
    #[serde(rename = "NS", default)]
    pub ns: Option<Vec<String>>,
    #[serde(rename = "TXT", default)]
    pub txt: Option<Vec<String>>,
    #[serde(rename = "SOA", default)]
    pub soa: Option<Vec<SoaRecord>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MxRecord {
    pub name: String,
    pub priority: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoaRecord {
    pub mname: String,
    pub rname: String,
    pub serial: u64,
    pub refresh: u64,
    pub retry: u64,
    pub expire: u64,
    pub minimum: u64,
}

//! Breach search payloads for `/api/breach`.
//!
//! The endpoint aggregates several upstream breach providers; each provider
//! block keeps its own entry shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregated breach results, one block per upstream provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachResult {
    #[serde(rename = "leakcheck-results")]
    pub leakcheck: Option<LeakCheckResults>,
    #[serde(rename = "snusbase-results")]
    pub snusbase: Option<SnusbaseResults>,
    #[serde(rename = "hackcheck-results")]
    pub hackcheck: Option<HackCheckResults>,
    #[serde(rename = "intelvault-results")]
    pub intelvault: Option<IntelVaultResults>,
    #[serde(rename = "inf0sec-results")]
    pub inf0sec: Option<Inf0secResults>,
    #[serde(rename = "breachbase-results")]
    pub breachbase: Option<BreachbaseResults>,
    #[serde(rename = "leakosint-results")]
    pub leakosint: Option<LeakosintResults>,
}

// ── LeakCheck ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakCheckResults {
    pub success: bool,
    #[serde(default)]
    pub quota: u64,
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub result: Vec<LeakCheckEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakCheckEntry {
    pub source: LeakCheckSource,
    #[serde(default)]
    pub fields: Vec<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profilename: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub name: Option<String>,
    pub dob: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub origin: Option<String>,
    pub ip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakCheckSource {
    pub name: String,
    pub breach_date: Option<String>,
    pub unverified: Option<u8>,
    pub passwordless: Option<u8>,
    pub compilation: Option<u8>,
}

// ── Snusbase ─────────────────────────────────────────────────────────────

/// Snusbase keys its results by upstream database name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnusbaseResults {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub results: HashMap<String, Vec<SnusbaseEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnusbaseEntry {
    pub username: Option<String>,
    pub email: Option<String>,
    pub hash: Option<String>,
    pub salt: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub uid: Option<i64>,
    pub id: Option<i64>,
    pub phone: Option<String>,
    pub created: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub followers: Option<i64>,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub lastip: Option<String>,
}

// ── HackCheck ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackCheckResults {
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub databases: u64,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    pub elapsed: Option<String>,
    #[serde(default)]
    pub results: Vec<HackCheckEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackCheckEntry {
    pub id: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub fullname: Option<String>,
    pub username: Option<String>,
    pub ipaddress: Option<String>,
    pub phonenumber: Option<String>,
    pub hash: Option<String>,
    pub otherfields: Option<String>,
    pub sensitivefields: Option<String>,
    pub source: HackCheckSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackCheckSource {
    pub name: String,
    pub date: Option<String>,
}

// ── IntelVault ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelVaultResults {
    pub success: bool,
    #[serde(default)]
    pub time_taken: f64,
    #[serde(default)]
    pub results: Vec<IntelVaultEntry>,
}

/// IntelVault entries carry the upstream index name plus a free-form data
/// record whose columns vary per index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelVaultEntry {
    pub index: String,
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

// ── Inf0sec ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inf0secResults {
    pub success: bool,
    pub time_taken: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Inf0secEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inf0secEntry {
    pub id: i64,
    pub label: String,
    pub date: Option<String>,
    #[serde(default)]
    pub logs: HashMap<String, serde_json::Value>,
}

// ── Breachbase ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachbaseResults {
    pub status: String,
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub content: Vec<BreachbaseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachbaseEntry {
    pub username: Option<String>,
    pub email: Option<String>,
    pub ip: Option<String>,
    pub password: Option<String>,
    pub origin: Option<String>,
}

// ── LeakOsint ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakosintResults {
    #[serde(rename = "List", default)]
    pub list: HashMap<String, LeakosintDatabase>,
    #[serde(rename = "NumOfDatabase", default)]
    pub num_of_database: u64,
    #[serde(rename = "NumOfResults", default)]
    pub num_of_results: u64,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "search time", default)]
    pub search_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakosintDatabase {
    #[serde(rename = "Data", default)]
    pub data: Vec<LeakosintEntry>,
    #[serde(rename = "InfoLeak", default)]
    pub info_leak: String,
    #[serde(rename = "NumOfResults", default)]
    pub num_of_results: u64,
}

/// LeakOsint rows are PascalCase and wildly heterogeneous; the common
/// identity columns are typed and everything else stays in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeakosintEntry {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub nick_name: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub domain: Option<String>,
    pub hash: Option<String>,
    pub salt: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "DOB")]
    pub dob: Option<String>,
    #[serde(rename = "IP")]
    pub ip: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

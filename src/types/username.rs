//! Multi-source username search payload for `/api/username`.
//!
//! Each field is one upstream source; a source that failed or returned
//! nothing may be absent or carry its own error shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::breach::LeakCheckResults;
use crate::types::domain::{DomainEmailEntry, DomainEntry, DomainUrlEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameResult {
    pub akula: Option<AkulaResult>,
    pub instagram: Option<InstagramResult>,
    pub leakcheck: Option<LeakCheckResults>,
    pub leaksight: Option<LeaksightResult>,
    pub bigcombo: Option<BigComboResult>,
    pub stealer: Option<StealerResult>,
    pub tiktok: Option<TikTokResult>,
    pub twitter: Option<TwitterResult>,
    pub xbox: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AkulaResult {
    pub success: bool,
    pub search_term: String,
    pub source: String,
    #[serde(default)]
    pub response_time: f64,
    pub results: AkulaMatches,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AkulaMatches {
    #[serde(default)]
    pub domains: Vec<DomainEntry>,
    #[serde(default)]
    pub emails: Vec<DomainEmailEntry>,
    #[serde(default)]
    pub urls: Vec<DomainUrlEntry>,
}

/// Instagram answers with its account-recovery probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramResult {
    pub button_title: Option<String>,
    pub error_title: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub uh_eligible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaksightResult {
    pub success: bool,
    #[serde(rename = "DatabaseOsintLeaks", default)]
    pub database_osint_leaks: Vec<LeaksightEntry>,
}

/// Leaksight rows come from marketing-list dumps with per-list columns;
/// the stable identity columns are typed, the rest stays in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaksightEntry {
    pub username: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub ip_address: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigComboResult {
    #[serde(rename = "Combolist", default)]
    pub combolist: Vec<BigComboEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigComboEntry {
    pub database_url: Option<BigComboCredential>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigComboCredential {
    pub host: String,
    pub user: String,
    pub pass: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StealerResult {
    pub json: StealerData,
}

/// Infostealer log dump matched against the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StealerData {
    #[serde(rename = "Username")]
    pub username: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "ZipCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "HWID")]
    pub hwid: Option<String>,
    #[serde(rename = "Hardwares")]
    pub hardwares: Option<String>,
    #[serde(rename = "AntiVirus")]
    pub anti_virus: Option<String>,
    #[serde(rename = "FileMalware")]
    pub file_malware: Option<String>,
    #[serde(rename = "DateBreach")]
    pub date_breach: Option<String>,
    #[serde(rename = "Autofills")]
    pub autofills: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
    pub ip: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub passwords: Vec<StealerPassword>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StealerPassword {
    pub url: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TikTokResult {
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterResult {
    pub user_id: Option<u64>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<String>,
    pub profile_url: Option<String>,
    pub profile_image_shape: Option<String>,
    pub account_status: Option<TwitterAccountStatus>,
    pub stats: Option<TwitterStats>,
    pub verification_details: Option<TwitterVerification>,
    pub urls_and_media: Option<TwitterMedia>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterAccountStatus {
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_translator: bool,
    #[serde(default)]
    pub possibly_sensitive: bool,
    #[serde(default)]
    pub withheld_in_countries: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwitterStats {
    #[serde(default)]
    pub fast_followers: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub listed_in: u64,
    #[serde(default)]
    pub media_count: u64,
    #[serde(default)]
    pub tweets: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterVerification {
    #[serde(default)]
    pub is_blue_verified: bool,
    #[serde(default)]
    pub is_identity_verified: bool,
    pub reason: Option<String>,
    pub verification_type: Option<String>,
    pub verified_since_utc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterMedia {
    pub profile_banner_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub website: Option<String>,
}

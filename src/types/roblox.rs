//! Roblox profile payload for `/api/roblox`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobloxProfile {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub created: String,
    pub is_banned: bool,
    pub external_app_display_name: Option<String>,
    pub has_verified_badge: bool,
    #[serde(rename = "avatar_url")]
    pub avatar_url: String,
    #[serde(default)]
    pub groups: Vec<RobloxGroup>,
    #[serde(rename = "friends_count", default)]
    pub friends_count: u64,
    #[serde(default)]
    pub membership: bool,
    #[serde(default)]
    pub games: Vec<RobloxGame>,
    #[serde(rename = "roblox_badges", default)]
    pub roblox_badges: Vec<RobloxBadge>,
    #[serde(rename = "social_links")]
    pub social_links: RobloxSocialLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobloxGroup {
    pub group: RobloxGroupInfo,
    pub role: RobloxGroupRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobloxGroupInfo {
    pub id: u64,
    pub name: String,
    pub member_count: u64,
    pub has_verified_badge: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobloxGroupRole {
    pub id: u64,
    pub name: String,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobloxGame {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub creator: RobloxEntityRef,
    pub root_place: RobloxEntityRef,
    pub created: String,
    pub updated: String,
    pub place_visits: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobloxEntityRef {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobloxBadge {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobloxSocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub twitch: Option<String>,
    pub guilded: Option<String>,
}

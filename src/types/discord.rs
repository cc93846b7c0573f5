//! Discord payloads: `/api/discord`, `/api/discord-to-roblox` and
//! `/api/discord-stalker`.

use serde::{Deserialize, Serialize};

/// Basic Discord profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub bot: Option<bool>,
    pub verified: Option<bool>,
}

/// Roblox account linked to a Discord id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordToRobloxResult {
    pub roblox_id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub created: String,
    pub description: String,
    pub avatar: String,
    #[serde(default)]
    pub badges: Vec<serde_json::Value>,
    #[serde(rename = "groupCount", default)]
    pub group_count: u64,
}

/// Activity history for a Discord id: messages, server membership,
/// username history and voice sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordStalkerResult {
    pub data: DiscordStalkerData,
    #[serde(default)]
    pub elapsed_ms: u64,
    pub query_author_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordStalkerData {
    #[serde(default)]
    pub messages: Vec<DiscordMessage>,
    #[serde(default)]
    pub server_activity: Vec<DiscordServerActivity>,
    #[serde(default)]
    pub username_history: Vec<DiscordUsernameHistory>,
    #[serde(default)]
    pub voice_sessions: Vec<DiscordVoiceSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordMessage {
    pub author_name: String,
    pub channel_id: u64,
    pub content: String,
    pub guild_id: u64,
    pub guild_name: String,
    /// 0 or 1 on the wire.
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: u8,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordServerActivity {
    pub guild_id: u64,
    pub guild_name: String,
    pub joined_at: Option<String>,
    pub left_at: Option<String>,
    pub first_seen_fallback: String,
    pub last_seen_fallback: String,
    pub last_message: Option<DiscordLastMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordLastMessage {
    pub content: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordUsernameHistory {
    pub display_name: String,
    pub first_seen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordVoiceSession {
    pub channel_name: String,
    pub guild_name: String,
    #[serde(default)]
    pub duration: u64,
    pub join_time: String,
    pub leave_time: String,
    #[serde(default)]
    pub participants: Vec<serde_json::Value>,
    #[serde(default)]
    pub participants_limited: bool,
}

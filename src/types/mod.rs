//! Wire types for API payloads, one module per endpoint.
//!
//! The client does not validate payload internals beyond the envelope, so
//! these types are deliberately tolerant: nullable fields are `Option`,
//! collections default to empty, unknown fields are ignored.

pub mod account;
pub mod breach;
pub mod chilean;
pub mod discord;
pub mod dns;
pub mod domain;
pub mod email;
pub mod github;
pub mod ip;
pub mod minecraft;
pub mod npd;
pub mod phone;
pub mod reddit;
pub mod roblox;
pub mod username;

pub use account::UserInfo;
pub use breach::BreachResult;
pub use chilean::ChileanNameResult;
pub use discord::{DiscordStalkerResult, DiscordToRobloxResult, DiscordUser};
pub use dns::DnsResult;
pub use domain::DomainResult;
pub use email::EmailResult;
pub use github::GitHubProfile;
pub use ip::IpLookupResult;
pub use minecraft::MinecraftResult;
pub use npd::{NpdResult, NpdSearchParams};
pub use phone::PhoneResult;
pub use reddit::RedditProfile;
pub use roblox::RobloxProfile;
pub use username::UsernameResult;

//! # osintcat-sdk
//!
//! Typed async Rust client for the [OsintCat](https://www.osintcat.net)
//! OSINT aggregation API: breach search, IP/phone/email lookups, DNS
//! resolution and social-platform profiles behind one authenticated client.
//!
//! The client owns the connection configuration (API key, timeout, default
//! headers), injects the key into every call, and normalizes every failure
//! into a single [`Error`](error::Error) kind. Calls are stateless and safe
//! to issue concurrently from a shared client.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use osintcat_sdk::prelude::*;
//!
//! let client = OsintCatClient::new("your-api-key")?;
//!
//! let ip = client.ip_info("1.1.1.1").await?;
//! let breaches = client.search_breaches("someone@example.com").await?;
//! ```

/// Client error type and result alias.
pub mod error;

/// The uniform `{success, data?, error?, _meta?}` response envelope.
pub mod envelope;

/// Network constants: API origin, timeout, identifying headers.
pub mod network;

/// Per-endpoint payload types.
pub mod types;

/// `OsintCatClient` — the entry point.
pub mod client;

pub use client::{OsintCatClient, OsintCatClientBuilder};
pub use envelope::OsintResponse;
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::client::{OsintCatClient, OsintCatClientBuilder};
    pub use crate::envelope::{LookupsLeft, OsintResponse, ResponseMeta};
    pub use crate::error::Error;
    pub use crate::network::DEFAULT_API_URL;
    pub use crate::types::{
        BreachResult, ChileanNameResult, DiscordStalkerResult, DiscordToRobloxResult, DiscordUser,
        DnsResult, DomainResult, EmailResult, GitHubProfile, IpLookupResult, MinecraftResult,
        NpdResult, NpdSearchParams, PhoneResult, RedditProfile, RobloxProfile, UserInfo,
        UsernameResult,
    };
}

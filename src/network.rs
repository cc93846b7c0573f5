//! Network constants.

use std::time::Duration;

/// Production API origin.
pub const DEFAULT_API_URL: &str = "https://www.osintcat.net";

/// Prefix shared by every API endpoint path.
pub const API_PREFIX: &str = "/api";

/// Default request timeout (90 s — several endpoints fan out to slow
/// upstream breach providers).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(90_000);

/// Default identifying `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("osintcat-sdk/", env!("CARGO_PKG_VERSION"));

/// `User-Agent` override required by the email OSINT endpoint.
pub const EMAIL_OSINT_USER_AGENT: &str = concat!(
    "Purpose: OSINT Investigation for osintcat-sdk/",
    env!("CARGO_PKG_VERSION"),
    " crate"
);

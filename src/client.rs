//! OsintCat REST API client implementation.
//!
//! [`OsintCatClient`] provides one typed method per remote endpoint. The API
//! key is injected as the `id` query parameter on every call; transport
//! failures and non-2xx responses are normalized into [`Error`].
//!
//! # Example
//!
//! ```rust,ignore
//! use osintcat_sdk::OsintCatClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OsintCatClient::new("your-api-key")?;
//!
//!     let breaches = client.search_breaches("someone@example.com").await?;
//!     if breaches.success {
//!         println!("{:#?}", breaches.data);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::envelope::OsintResponse;
use crate::error::{Error, ErrorBody, Result};
use crate::network::{
    API_PREFIX, DEFAULT_API_URL, DEFAULT_TIMEOUT, EMAIL_OSINT_USER_AGENT, USER_AGENT,
};
use crate::types::*;

/// Builder for configuring [`OsintCatClient`].
#[derive(Debug, Clone)]
pub struct OsintCatClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    custom_headers: Vec<(String, String)>,
}

impl OsintCatClientBuilder {
    /// Create a new builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            custom_headers: Vec::new(),
        }
    }

    /// Override the API origin. Intended for testing against a local server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout (default 90 s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in milliseconds.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }

    /// Add a custom header sent with every request. Custom headers are merged
    /// over the client defaults; the last value set for a name wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails before any network activity if the API key is empty or a custom
    /// header is not a valid HTTP header.
    pub fn build(self) -> Result<OsintCatClient> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidParameter("API key is required".to_string()));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in &self.custom_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| Error::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(OsintCatClient {
            http,
            base_url: self.base_url,
            api_key: self.api_key,
            timeout: self.timeout,
        })
    }
}

/// OsintCat REST API client.
///
/// Configuration is immutable after construction. Every method is a single
/// stateless request/response exchange, so one client can be shared across
/// tasks and called concurrently without locking; a failed call never
/// invalidates the client.
#[derive(Debug, Clone)]
pub struct OsintCatClient {
    http: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl OsintCatClient {
    /// Create a new client with default settings (production origin,
    /// 90 s timeout).
    ///
    /// # Errors
    ///
    /// Fails if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        OsintCatClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> OsintCatClientBuilder {
        OsintCatClientBuilder::new(api_key)
    }

    /// The configured API origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── Internal helpers ─────────────────────────────────────────────────

    /// Shared request helper: every endpoint call goes through here.
    ///
    /// Injects the API key, applies optional per-request header overrides,
    /// and normalizes failures. A 2xx body is returned verbatim.
    async fn get_api<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        extra_headers: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);

        let mut req = self.http.get(&url).query(&[("id", self.api_key.as_str())]);
        if !query.is_empty() {
            req = req.query(&query);
        }
        for (name, value) in extra_headers {
            req = req.header(*name, *value);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            tracing::debug!(path, status = status.as_u16(), "request succeeded");
            return Ok(resp.json::<T>().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(path, status = status.as_u16(), "request failed");
        Err(Self::api_error(status, body))
    }

    /// Build the normalized error for a non-2xx response.
    ///
    /// Message priority: server `error` field, server `message` field,
    /// status fallback.
    fn api_error(status: StatusCode, body: String) -> Error {
        let raw = serde_json::from_str::<serde_json::Value>(&body).ok();
        let message = raw
            .as_ref()
            .and_then(|v| serde_json::from_value::<ErrorBody>(v.clone()).ok())
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

        Error::Api {
            status: status.as_u16(),
            message,
            raw,
        }
    }

    /// Validate that an argument is non-empty after trimming; returns the
    /// trimmed value.
    fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidParameter(format!("{} cannot be empty", what)));
        }
        Ok(trimmed)
    }

    /// Validate a basic `local@domain.tld` shape: no whitespace, a single
    /// `@`, at least one dot in the domain with non-empty segments.
    fn validate_email(email: &str) -> Result<&str> {
        let email = Self::non_empty(email, "email")?;
        if Self::is_valid_email(email) {
            Ok(email)
        } else {
            Err(Error::InvalidParameter("Invalid email format".to_string()))
        }
    }

    fn is_valid_email(email: &str) -> bool {
        let clean = |s: &str| !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '@');
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return false;
        };
        clean(local) && clean(host) && clean(tld)
    }

    // ── Account ──────────────────────────────────────────────────────────

    /// Get account information and usage statistics for the configured key.
    ///
    /// Takes no query parameter and, unlike the lookup endpoints, returns
    /// the payload directly rather than wrapped in an envelope.
    pub async fn user_info(&self) -> Result<UserInfo> {
        self.get_api("/user", &[], &[]).await
    }

    // ── Breach data ──────────────────────────────────────────────────────

    /// Search the aggregated breach databases for an email or username.
    pub async fn search_breaches(&self, query: &str) -> Result<OsintResponse<BreachResult>> {
        let query = Self::non_empty(query, "query")?;
        self.get_api("/breach", &[("query", query)], &[]).await
    }

    /// Search Minecraft combolist dumps by username or UUID.
    pub async fn search_minecraft(
        &self,
        username_or_uuid: &str,
    ) -> Result<OsintResponse<MinecraftResult>> {
        let query = Self::non_empty(username_or_uuid, "username or UUID")?;
        self.get_api("/minecraft", &[("query", query)], &[]).await
    }

    // ── Discord ──────────────────────────────────────────────────────────

    /// Get a Discord profile by user id.
    pub async fn discord_info(&self, user_id: &str) -> Result<OsintResponse<DiscordUser>> {
        let query = Self::non_empty(user_id, "user ID")?;
        self.get_api("/discord", &[("query", query)], &[]).await
    }

    /// Resolve the Roblox account linked to a Discord id.
    pub async fn discord_to_roblox(
        &self,
        discord_id: &str,
    ) -> Result<OsintResponse<DiscordToRobloxResult>> {
        let query = Self::non_empty(discord_id, "Discord ID")?;
        self.get_api("/discord-to-roblox", &[("query", query)], &[])
            .await
    }

    /// Get message, server, username and voice-session history for a
    /// Discord id.
    pub async fn discord_stalker_info(
        &self,
        discord_id: &str,
    ) -> Result<OsintResponse<DiscordStalkerResult>> {
        let query = Self::non_empty(discord_id, "Discord ID")?;
        self.get_api("/discord-stalker", &[("query", query)], &[])
            .await
    }

    // ── Platform profiles ────────────────────────────────────────────────

    /// Get a Roblox profile by username.
    pub async fn roblox_info(&self, username: &str) -> Result<OsintResponse<RobloxProfile>> {
        let query = Self::non_empty(username, "username")?;
        self.get_api("/roblox", &[("query", query)], &[]).await
    }

    /// Get a Reddit profile and recent activity by username.
    pub async fn reddit_info(&self, username: &str) -> Result<OsintResponse<RedditProfile>> {
        let query = Self::non_empty(username, "username")?;
        self.get_api("/reddit", &[("query", query)], &[]).await
    }

    /// Get a GitHub profile with repositories and organizations.
    pub async fn github_info(&self, username: &str) -> Result<OsintResponse<GitHubProfile>> {
        let query = Self::non_empty(username, "username")?;
        self.get_api("/github-osint", &[("query", query)], &[]).await
    }

    /// Search for a username across platforms and breach sources.
    pub async fn search_username(&self, username: &str) -> Result<OsintResponse<UsernameResult>> {
        let query = Self::non_empty(username, "username")?;
        self.get_api("/username", &[("query", query)], &[]).await
    }

    // ── Contact lookups ──────────────────────────────────────────────────

    /// Validate and enrich an email address.
    ///
    /// The email OSINT upstream requires a distinct identifying
    /// `User-Agent`, attached as a per-request override.
    pub async fn email_info(&self, email: &str) -> Result<OsintResponse<EmailResult>> {
        let query = Self::validate_email(email)?;
        self.get_api(
            "/email-osint",
            &[("query", query)],
            &[("User-Agent", EMAIL_OSINT_USER_AGENT)],
        )
        .await
    }

    /// Get carrier, location and line-type information for a phone number.
    pub async fn phone_info(&self, phone: &str) -> Result<OsintResponse<PhoneResult>> {
        let query = Self::non_empty(phone, "phone number")?;
        self.get_api("/phone-osint", &[("query", query)], &[]).await
    }

    // ── Records search ───────────────────────────────────────────────────

    /// Search national public-data records.
    ///
    /// # Errors
    ///
    /// Fails locally if no search parameter is set.
    pub async fn search_npd(&self, params: &NpdSearchParams) -> Result<OsintResponse<NpdResult>> {
        if params.is_empty() {
            return Err(Error::InvalidParameter(
                "At least one search parameter is required".to_string(),
            ));
        }
        let pairs = params.to_query();
        let query: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        self.get_api("/npd", &query, &[]).await
    }

    /// Search the Chilean national registry by full name.
    pub async fn search_chilean_name(
        &self,
        name: &str,
    ) -> Result<OsintResponse<Vec<ChileanNameResult>>> {
        let query = Self::non_empty(name, "name")?;
        self.get_api("/chilean-name", &[("query", query)], &[]).await
    }

    // ── Infrastructure ───────────────────────────────────────────────────

    /// Search a domain for associated credentials, URLs and subdomains.
    pub async fn search_domain(&self, domain: &str) -> Result<OsintResponse<DomainResult>> {
        let query = Self::non_empty(domain, "domain")?;
        self.get_api("/domain", &[("query", query)], &[]).await
    }

    /// Get geolocation and ISP information for an IP address.
    pub async fn ip_info(&self, ip: &str) -> Result<OsintResponse<IpLookupResult>> {
        let query = Self::non_empty(ip, "IP address")?;
        self.get_api("/ip", &[("query", query)], &[]).await
    }

    /// Resolve DNS records for a domain.
    pub async fn resolve_dns(&self, domain: &str) -> Result<OsintResponse<DnsResult>> {
        let query = Self::non_empty(domain, "domain")?;
        self.get_api("/dns-resolver", &[("query", query)], &[]).await
    }
}

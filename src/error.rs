//! Client error type for the OsintCat API.

use thiserror::Error;

/// The single error kind surfaced by every client operation.
///
/// Local validation failures, transport failures, and non-2xx responses all
/// land here; callers match on the variant or use the uniform accessors
/// [`status_code`](Error::status_code) / [`raw_response`](Error::raw_response).
#[derive(Debug, Error)]
pub enum Error {
    /// Local validation failure (empty argument, malformed email, empty
    /// API key). Raised before any network call is made.
    #[error("{0}")]
    InvalidParameter(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Best-available message: server `error` field, then server
        /// `message` field, then a status fallback.
        message: String,
        /// Raw server payload, when the body was valid JSON.
        raw: Option<serde_json::Value>,
    },

    /// Transport-level failure (connect, timeout, body read, JSON decode).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status code, present only for non-2xx responses.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw server payload of a failed response, when one was captured.
    pub fn raw_response(&self) -> Option<&serde_json::Value> {
        match self {
            Error::Api { raw, .. } => raw.as_ref(),
            _ => None,
        }
    }

    /// True for errors raised by local argument validation.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body shape the server uses for failed requests.
///
/// Some endpoints report under `error`, others under `message`; `error`
/// takes priority when both are present.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

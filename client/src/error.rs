//! Client error handling
//!
//! One error type for the request path. Decode failures on stored tokens are
//! deliberately NOT here: those are recovered locally by treating the
//! session as absent and never reach a caller (see `storage::TokenStore`).

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the API client
///
/// `Api` messages come straight from the backend's `detail` field and are
/// meant to be shown to the user verbatim; callers must not swallow them.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-success HTTP response from the backend
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape
    ///
    /// Only produced by the typed wrappers; the raw `request` path returns
    /// the body verbatim without schema validation.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
}

impl ClientError {
    /// Build an `Api` error from a status and an optional `detail` message
    pub(crate) fn api(status: StatusCode, detail: Option<String>) -> Self {
        ClientError::Api {
            status,
            message: detail.unwrap_or_else(|| "API Error".to_string()),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

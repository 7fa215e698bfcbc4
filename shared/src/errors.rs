//! Error types for the CarePortal client

use thiserror::Error;

/// Failure to extract claims from a stored token
///
/// These are recovered locally by treating the session as absent; they are
/// never shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64")]
    InvalidBase64,

    #[error("token payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("token payload is not valid JSON")]
    InvalidJson,
}

//! API request and response types
//!
//! Wire-exact counterparts of the backend's `/auth/*` contract, plus the
//! derived session and the persisted theme preference.

use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response to a successful login or registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Role as issued by the backend; kept raw so the tolerant mapping in
    /// [`Role::from_claim`] stays the single place unknown values are handled
    pub user_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Password reset initiation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Password reset completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Response to `GET /auth/me`
///
/// The backend sends `access_token: null` here; only the role matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_role: String,
}

/// Generic `{ "message": ... }` acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the backend on failure responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// An authenticated session derived from a decodable stored token
///
/// In-memory cache of what storage holds; cleared on sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

/// UI theme preference, persisted next to the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Forest,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Forest => "forest",
        }
    }

    /// Parse a stored value, defaulting to `Light` on anything unknown
    pub fn from_stored(value: &str) -> Self {
        match value {
            "forest" => Theme::Forest,
            _ => Theme::Light,
        }
    }
}

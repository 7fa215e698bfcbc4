//! Token payload claims
//!
//! The backend issues tokens whose payload carries `sub`, `email`, and
//! `role`. Only `role` decides whether a session exists; everything else is
//! optional and extra fields (exp, iat, ...) are ignored.

use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// Claims decoded from a token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Raw role claim; a session is only valid when this is present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Subject (user ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl Claims {
    /// The claimed role, mapped through the tolerant fallback
    ///
    /// Returns `None` when the token carries no role claim at all, which the
    /// guard treats as "no authenticated session".
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().map(Role::from_claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_are_ignored() {
        let claims: Claims = serde_json::from_str(
            r#"{"sub":"42","email":"a@x.com","role":"ADMIN","exp":1735689600,"iat":1735686000}"#,
        )
        .unwrap();
        assert_eq!(claims.role(), Some(Role::Admin));
        assert_eq!(claims.email.as_deref(), Some("a@x.com"));
        assert_eq!(claims.sub.as_deref(), Some("42"));
    }

    #[test]
    fn missing_role_yields_none() {
        let claims: Claims = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn unknown_role_maps_to_patient() {
        let claims: Claims = serde_json::from_str(r#"{"role":"JANITOR"}"#).unwrap();
        assert_eq!(claims.role(), Some(Role::Patient));
    }
}

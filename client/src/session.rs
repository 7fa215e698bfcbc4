//! Session lifecycle
//!
//! The session is a derived view of the stored token: set on app start when
//! a decodable token exists, replaced on login or registration, cleared on
//! sign-out. It is owned by whoever constructs the manager and handed down
//! explicitly; there is no global.

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::storage::TokenStore;
use careportal_shared::{LoginRequest, RegisterRequest, Role, Session};
use tracing::info;

/// Owner of the in-memory session, backed by the token store
pub struct SessionManager {
    tokens: TokenStore,
    session: Option<Session>,
}

impl SessionManager {
    /// Initialize from storage: a stored token that decodes to claims with a
    /// role becomes the session; anything else starts signed out.
    pub fn from_storage(tokens: TokenStore) -> Self {
        let session = tokens.claims().and_then(|claims| {
            let role = claims.role()?;
            Some(Session {
                email: claims.email.unwrap_or_default(),
                role,
            })
        });
        Self { tokens, session }
    }

    /// Current session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Log in, persist the issued token, and cache the session.
    ///
    /// Returns the role so the caller can redirect to its dashboard. The
    /// role comes from the login response, not the token payload, matching
    /// the backend's `user_role` contract.
    pub async fn login(&mut self, api: &ApiClient, email: &str, password: &str) -> ClientResult<Role> {
        let resp = api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let role = Role::from_claim(&resp.user_role);
        self.tokens.write_token(&resp.access_token);
        self.session = Some(Session {
            email: email.to_string(),
            role,
        });
        info!(%role, "Logged in");
        Ok(role)
    }

    /// Register a new account; otherwise identical to `login`.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
        role: Role,
    ) -> ClientResult<Role> {
        let resp = api
            .register(&RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                role,
            })
            .await?;

        let role = Role::from_claim(&resp.user_role);
        self.tokens.write_token(&resp.access_token);
        self.session = Some(Session {
            email: email.to_string(),
            role,
        });
        info!(%role, "Registered");
        Ok(role)
    }

    /// Clear the session and the persisted token. Idempotent.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.tokens.clear_token();
    }
}

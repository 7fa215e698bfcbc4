//! Route guarding
//!
//! Pure routing decisions computed once at route entry from the stored
//! token. These guards improve UX by keeping users off pages they should
//! not see, but they are not a security control: the backend re-authorizes
//! every API call with the same token.

use crate::storage::TokenStore;
use careportal_shared::Role;

/// Path of the login page, the destination for unauthenticated users
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check at route entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the page
    Stay,
    /// Navigate away before rendering anything
    Redirect(&'static str),
}

/// Guard for the auth pages (login, register, forgot/reset password).
///
/// An already-authenticated user has no business re-submitting credentials;
/// send them to their own dashboard. Anyone without a decodable role stays
/// and sees the form.
pub fn redirect_from_auth_pages(tokens: &TokenStore) -> RouteDecision {
    match tokens.claims().and_then(|claims| claims.role()) {
        Some(role) => RouteDecision::Redirect(role.dashboard_path()),
        None => RouteDecision::Stay,
    }
}

/// Guard for protected dashboard pages.
///
/// `required` is the set of roles the page accepts; empty means any
/// authenticated role. Unauthenticated (no token, or a token without a
/// decodable role claim) goes to login. An authenticated user with the
/// wrong role is merely misrouted and goes to their own dashboard, not back
/// to login.
pub fn ensure_dashboard_access(tokens: &TokenStore, required: &[Role]) -> RouteDecision {
    let role = match tokens.claims().and_then(|claims| claims.role()) {
        Some(role) => role,
        None => return RouteDecision::Redirect(LOGIN_PATH),
    };

    if !required.is_empty() && !required.contains(&role) {
        return RouteDecision::Redirect(role.dashboard_path());
    }

    RouteDecision::Stay
}

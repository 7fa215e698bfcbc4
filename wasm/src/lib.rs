//! CarePortal WASM Module
//!
//! WebAssembly bindings over the pure authentication core so browser code
//! can share the exact decode and routing logic the native client uses.

use careportal_shared::{decode, Role};
use wasm_bindgen::prelude::*;

/// Extract the raw role claim from a bearer token.
///
/// Returns `None` when the token is undecodable or carries no role, which
/// callers treat as "no authenticated session".
#[wasm_bindgen]
pub fn decode_role(token: &str) -> Option<String> {
    decode(token).ok().and_then(|claims| claims.role)
}

/// Extract the email claim from a bearer token, if present
#[wasm_bindgen]
pub fn decode_email(token: &str) -> Option<String> {
    decode(token).ok().and_then(|claims| claims.email)
}

/// Home dashboard path for a raw role claim.
///
/// Unrecognized roles map to the patient dashboard.
#[wasm_bindgen]
pub fn dashboard_path(role: &str) -> String {
    Role::from_claim(role).dashboard_path().to_string()
}

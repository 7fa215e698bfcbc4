//! CarePortal Shared Library
//!
//! This crate contains the types and pure logic shared across the client
//! SDK and the WASM bindings: the role model, token claims, the unverified
//! payload decoder, and the wire types for the auth endpoints.

pub mod claims;
pub mod errors;
pub mod roles;
pub mod token;
pub mod types;

// Re-export commonly used items
pub use claims::Claims;
pub use errors::DecodeError;
pub use roles::Role;
pub use token::decode;
pub use types::{
    AuthResponse, ErrorBody, ForgotPasswordRequest, LoginRequest, MeResponse, MessageResponse,
    RegisterRequest, ResetPasswordRequest, Session, Theme,
};

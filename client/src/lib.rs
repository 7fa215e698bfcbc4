//! CarePortal Client SDK
//!
//! Client-side authentication core for the hospital-management backend:
//! token storage and unverified decode, route guarding, and an authenticated
//! request client. Everything here is advisory UX plumbing; the backend
//! authorizes every call independently with the same token.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;

pub use api::{ApiClient, RequestOptions};
pub use config::ClientConfig;
pub use error::ClientError;
pub use guard::{ensure_dashboard_access, redirect_from_auth_pages, RouteDecision};
pub use session::SessionManager;
pub use storage::{FileStorage, MemoryStorage, Storage, TokenStore};

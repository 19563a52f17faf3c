//! Request-processing middleware.

/// Bearer-token auth gate and role gate
pub mod auth;

pub use auth::{auth_gate, require_role, AuthenticatedUser};

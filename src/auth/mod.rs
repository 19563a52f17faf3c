//! Authentication Module
//!
//! User credentials, password hashing, session tokens, and the HTTP
//! handlers for signup and login.
//!
//! # Authentication Flow
//!
//! 1. **Signup**: `{username, password, role}` → password hashed → record
//!    inserted. Owners are activated immediately; vets and admins wait for
//!    an administrator. No token is issued.
//! 2. **Login**: credential looked up → password verified → activation gate
//!    checked → 1-hour JWT issued.
//! 3. **Protected requests**: the auth gate in `crate::middleware` verifies
//!    the bearer token and attaches the claims snapshot to the request.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (work factor 10) before storage and
//!   never logged in plaintext
//! - Tokens are stateless HS256 JWTs; there is no server-side session and
//!   no revocation before expiry
//! - An inactive account is rejected at login even with a correct password

/// User model and credential store
pub mod users;

/// Password hashing and verification
pub mod password;

/// Session token issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

/// In-memory store for tests
#[cfg(test)]
pub mod testing;

pub use handlers::{login, signup};
pub use tokens::{Claims, TokenService, TOKEN_TTL};
pub use users::{CredentialStore, PgCredentialStore, Role, User};

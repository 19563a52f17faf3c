//! HTTP handlers for the authentication endpoints.

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// User authentication handler
pub mod login;

pub use login::login;
pub use signup::signup;
pub use types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

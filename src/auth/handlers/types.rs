/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup and login endpoints.
 *
 * Request fields default to empty strings so that an absent field and an
 * empty one both fall through to the same "Missing fields" validation,
 * instead of being rejected by deserialization with a different status.
 */

use serde::{Deserialize, Serialize};

/// Sign up request: `{username, password, role}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Requested role; validated against the closed set by the handler.
    #[serde(default)]
    pub role: String,
}

/// Login request: `{username, password}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response. The token is also set as an HttpOnly cookie,
/// but the body is the canonical way for clients to receive it.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Generic confirmation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

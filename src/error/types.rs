/**
 * API Error Types
 *
 * The error taxonomy for the whole HTTP surface. Validation and
 * authentication failures carry exact wire messages; anything unexpected
 * collapses into a generic internal error whose detail is logged
 * server-side and never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::password::PasswordError;
use crate::auth::users::StoreError;

/// Errors surfaced to API clients.
///
/// Variants are kept distinct even where status codes coincide — an unknown
/// username and a wrong password are both 401, but callers of the flows can
/// tell them apart.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is absent or empty.
    #[error("Missing fields")]
    MissingFields,

    /// Signup role outside the closed {owner, vet, admin} set.
    #[error("Invalid role")]
    InvalidRole,

    /// Login with an unknown username.
    #[error("User not found")]
    UserNotFound,

    /// Login with a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login with a correct password but an unactivated account.
    #[error("Inactive account, contact your administrator")]
    InactiveAccount,

    /// Missing or malformed Authorization header on a protected route.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Bearer token failed verification (bad signature or expired).
    #[error("Invalid token")]
    InvalidToken,

    /// Authenticated, but the role is not allowed on this route.
    #[error("Forbidden")]
    Forbidden,

    /// Signup with a username that already exists.
    #[error("Username already exists")]
    DuplicateUsername,

    /// A record lookup came back empty.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Store, hashing, or token-issuance failure. The detail is logged
    /// when the response is built; the client sees only the generic message.
    #[error("Internal server error")]
    Internal { detail: String },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidRole => StatusCode::BAD_REQUEST,
            Self::UserNotFound
            | Self::InvalidCredentials
            | Self::InactiveAccount
            | Self::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::DuplicateUsername => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername => Self::DuplicateUsername,
            StoreError::Database(db_err) => Self::internal(db_err.to_string()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal(err.to_string())
    }
}

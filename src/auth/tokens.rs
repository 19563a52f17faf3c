/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited bearer tokens
 * handed out at login. Tokens are stateless JWTs: validity is determined by
 * signature and expiry alone, nothing is persisted server-side, and there is
 * no revocation before expiry.
 */

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::auth::users::Role;

/// Token lifetime: 1 hour, no refresh mechanism.
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// JWT claims structure
///
/// A snapshot of the credential at issuance time. Verification never
/// re-reads the store, so role or activation changes only show up in
/// tokens issued afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// Username
    pub username: String,
    /// Role at issuance time
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,
}

/// Issues and verifies session tokens.
///
/// The signing secret and lifetime are injected at construction; the
/// service is cheap to clone and read-only after startup.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a signed token for a user, expiring `ttl` from now.
    pub fn issue(
        &self,
        user_id: i64,
        username: &str,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, username, role, unix_now())
    }

    fn issue_at(
        &self,
        user_id: i64,
        username: &str,
        role: Role,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id,
            username: username.to_owned(),
            role,
            iat: issued_at,
            exp: issued_at + self.ttl.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims.
    ///
    /// Expiry and signature failures are distinguishable so callers that
    /// care can tell them apart; the auth gate treats both as rejection.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        // The 1-hour lifetime is exact; the default 60s leeway would stretch it.
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

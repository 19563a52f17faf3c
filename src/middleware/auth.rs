/**
 * Authentication Middleware
 *
 * The auth gate in front of protected routes, plus the role gate for
 * admin-only routes.
 *
 * The gate:
 * 1. Reads the Authorization header; anything other than `Bearer <token>`
 *    is rejected with 401 Not authenticated
 * 2. Verifies the token; any verification failure (bad signature, expired)
 *    is rejected with 403 Invalid token
 * 3. Attaches the decoded claims to the request extensions
 *
 * Downstream handlers trust the token's snapshot; the credential store is
 * never re-queried during verification.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::TokenService;
use crate::auth::users::Role;
use crate::error::ApiError;

/// Identity decoded from the bearer token, attached to request extensions
/// by the auth gate.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Bearer-token auth gate.
pub async fn auth_gate(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::NotAuthenticated
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::NotAuthenticated
    })?;

    let claims = tokens.verify(token).map_err(|err| {
        tracing::warn!("token rejected: {err}");
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Role gate for routes restricted to a subset of roles. Must sit inside
/// the auth gate, which provides the `AuthenticatedUser` extension.
pub async fn require_role(
    allowed: &'static [Role],
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or(ApiError::NotAuthenticated)?;

    if !allowed.contains(&user.role) {
        tracing::warn!(username = %user.username, role = %user.role, "role not permitted for this route");
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}

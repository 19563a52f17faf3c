/**
 * Login Handler
 *
 * POST /login — verify credentials and issue a session token.
 *
 * # Authentication Process (strict order, short-circuit on first failure)
 *
 * 1. Require username and password
 * 2. Look up the credential by username
 * 3. Verify the password against the stored hash
 * 4. Check the activation gate
 * 5. Issue a 1-hour session token
 *
 * The token is returned in the body and additionally set as an HttpOnly
 * cookie. Unknown user, wrong password, and inactive account all answer
 * 401 with distinct error strings.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::password;
use crate::auth::tokens::{TokenService, TOKEN_TTL};
use crate::auth::users::CredentialStore;
use crate::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `400 Missing fields` - username or password absent or empty
/// * `401 User not found` - no credential with that username
/// * `401 Invalid credentials` - password mismatch
/// * `401 Inactive account` - activation gate closed, set after password check
/// * `500` - store, hashing, or token-issuance failure
pub async fn login(
    State(store): State<Arc<dyn CredentialStore>>,
    State(tokens): State<TokenService>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let user = store
        .find_by_username(&request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %request.username, "login for unknown user");
            ApiError::UserNotFound
        })?;

    let valid = password::verify_password(&request.password, &user.password_hash).await?;
    if !valid {
        tracing::warn!(username = %user.username, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    // The activation gate comes after the password check: a correct password
    // on an unactivated account must surface as InactiveAccount.
    if !user.active {
        tracing::warn!(username = %user.username, "login on inactive account");
        return Err(ApiError::InactiveAccount);
    }

    let token = tokens.issue(user.id, &user.username, user.role)?;

    tracing::info!(username = %user.username, role = %user.role, "user logged in");

    let cookie = format!(
        "token={token}; HttpOnly; Max-Age={}; SameSite=Lax; Path=/",
        TOKEN_TTL.as_secs()
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse { token }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::handlers::signup::signup;
    use crate::auth::handlers::types::SignupRequest;
    use crate::auth::testing::MemoryCredentialStore;
    use crate::auth::users::Role;
    use axum::http::StatusCode;

    fn tokens() -> TokenService {
        TokenService::new("test-secret", TOKEN_TTL)
    }

    async fn store_with_user(username: &str, password: &str, role: &str) -> Arc<dyn CredentialStore> {
        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        signup(
            State(store.clone()),
            Json(SignupRequest {
                username: username.to_string(),
                password: password.to_string(),
                role: role.to_string(),
            }),
        )
        .await
        .unwrap();
        store
    }

    fn request(username: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie() {
        let store = store_with_user("alice", "pw123", "owner").await;

        let response = login(State(store), State(tokens()), request("alice", "pw123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let store = store_with_user("alice", "pw123", "owner").await;

        for (username, password) in [("", "pw123"), ("alice", "")] {
            let result = login(
                State(store.clone()),
                State(tokens()),
                request(username, password),
            )
            .await;
            assert!(matches!(result, Err(ApiError::MissingFields)));
        }
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_distinct_from_bad_password() {
        let store = store_with_user("alice", "pw123", "owner").await;

        let result = login(
            State(store.clone()),
            State(tokens()),
            request("nobody", "pw123"),
        )
        .await;
        assert!(matches!(result, Err(ApiError::UserNotFound)));

        let result = login(State(store), State(tokens()), request("alice", "wrong")).await;
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_inactive_account_after_password_check() {
        // Vet accounts start inactive: correct password must still be
        // answered with InactiveAccount, wrong password with
        // InvalidCredentials.
        let store = store_with_user("bob", "pw", "vet").await;

        let result = login(State(store.clone()), State(tokens()), request("bob", "pw")).await;
        assert!(matches!(result, Err(ApiError::InactiveAccount)));

        let result = login(State(store), State(tokens()), request("bob", "wrong")).await;
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_succeeds_after_activation() {
        let store = store_with_user("bob", "pw", "vet").await;
        let user = store.find_by_username("bob").await.unwrap().unwrap();

        store.set_active(user.id, true).await.unwrap();

        let response = login(State(store), State(tokens()), request("bob", "pw"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_issued_token_snapshots_role() {
        let store = store_with_user("alice", "pw123", "owner").await;
        let user = store.find_by_username("alice").await.unwrap().unwrap();

        let token = tokens().issue(user.id, &user.username, user.role).unwrap();
        let claims = tokens().verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Owner);
    }
}

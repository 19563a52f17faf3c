/**
 * Signup Handler
 *
 * POST /signup — create a credential record.
 *
 * # Registration Process
 *
 * 1. Require username, password, and role
 * 2. Validate the role against the closed set
 * 3. Auto-activate owners; vets and admins start inactive
 * 4. Hash the password
 * 5. Insert the record
 *
 * No token is issued on signup; the caller logs in separately.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

use crate::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::auth::password;
use crate::auth::users::{CredentialStore, NewUser, Role};
use crate::error::ApiError;

/// Sign up handler
///
/// # Errors
///
/// * `400 Missing fields` - a required field is absent or empty
/// * `400 Invalid role` - role outside {owner, vet, admin}
/// * `409 Username already exists` - uniqueness violation in the store
/// * `500` - any other store or hashing failure
pub async fn signup(
    State(store): State<Arc<dyn CredentialStore>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if request.username.is_empty() || request.password.is_empty() || request.role.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let role = Role::from_str(&request.role).ok_or(ApiError::InvalidRole)?;

    // Owners can use their account immediately; vets and admins wait for an
    // administrator to activate them.
    let active = role == Role::Owner;

    let password_hash = password::hash_password(&request.password).await?;

    let user = store
        .create(NewUser {
            username: request.username,
            password_hash,
            role,
            active,
        })
        .await?;

    tracing::info!(username = %user.username, role = %user.role, "user created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::MemoryCredentialStore;
    use pretty_assertions::assert_eq;

    fn store() -> Arc<dyn CredentialStore> {
        Arc::new(MemoryCredentialStore::new())
    }

    fn request(username: &str, password: &str, role: &str) -> Json<SignupRequest> {
        Json(SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        })
    }

    #[tokio::test]
    async fn test_signup_owner_is_active_immediately() {
        let store = store();
        let (status, body) = signup(State(store.clone()), request("alice", "pw123", "owner"))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "User created");

        let user = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(user.role, Role::Owner);
        assert!(user.active);
    }

    #[tokio::test]
    async fn test_signup_vet_starts_inactive() {
        let store = store();
        signup(State(store.clone()), request("bob", "pw", "vet"))
            .await
            .unwrap();

        let user = store.find_by_username("bob").await.unwrap().unwrap();
        assert_eq!(user.role, Role::Vet);
        assert!(!user.active);
    }

    #[tokio::test]
    async fn test_signup_admin_starts_inactive() {
        let store = store();
        signup(State(store.clone()), request("root", "pw", "admin"))
            .await
            .unwrap();

        let user = store.find_by_username("root").await.unwrap().unwrap();
        assert!(!user.active);
    }

    #[tokio::test]
    async fn test_signup_password_is_hashed() {
        let store = store();
        signup(State(store.clone()), request("alice", "pw123", "owner"))
            .await
            .unwrap();

        let user = store.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "pw123");
        assert!(user.password_hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let store = store();
        for (username, password, role) in [
            ("", "pw", "owner"),
            ("alice", "", "owner"),
            ("alice", "pw", ""),
        ] {
            let result = signup(State(store.clone()), request(username, password, role)).await;
            assert!(matches!(result, Err(ApiError::MissingFields)));
        }
    }

    #[tokio::test]
    async fn test_signup_invalid_role() {
        let result = signup(State(store()), request("alice", "pw", "superuser")).await;
        assert!(matches!(result, Err(ApiError::InvalidRole)));
    }

    #[tokio::test]
    async fn test_signup_duplicate_username_is_conflict() {
        let store = store();
        signup(State(store.clone()), request("alice", "pw123", "owner"))
            .await
            .unwrap();

        let result = signup(State(store.clone()), request("alice", "other", "vet")).await;
        assert!(matches!(result, Err(ApiError::DuplicateUsername)));
    }
}

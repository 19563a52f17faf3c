/**
 * Admin User Management
 *
 * Administrative endpoints over the credential store: listing accounts,
 * changing roles, flipping the activation gate, and deleting accounts.
 * All of these sit behind the auth gate plus the admin role gate.
 *
 * Activation is the external update the login flow depends on: vet and
 * admin accounts stay locked out until an administrator PATCHes
 * `active = true` here.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::users::{CredentialStore, Role, User};
use crate::error::ApiError;
use crate::routes::responses::SuccessResponse;

/// Account listing entry. The password hash never appears here.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub active: bool,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            active: user.active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

/// GET /users
pub async fn list(
    State(store): State<Arc<dyn CredentialStore>>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = store.list().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// PUT /users/{id} — change an account's role.
pub async fn update_role(
    State(store): State<Arc<dyn CredentialStore>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRoleRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let role = Role::from_str(&request.role).ok_or(ApiError::InvalidRole)?;

    let found = store.update_role(id, role).await?;
    if !found {
        return Err(ApiError::NotFound("User"));
    }

    tracing::info!(user_id = id, role = %role, "user role updated");
    Ok(Json(SuccessResponse::ok()))
}

/// PATCH /users/{id} — open or close the activation gate.
pub async fn set_active(
    State(store): State<Arc<dyn CredentialStore>>,
    Path(id): Path<i64>,
    Json(request): Json<SetActiveRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let found = store.set_active(id, request.active).await?;
    if !found {
        return Err(ApiError::NotFound("User"));
    }

    tracing::info!(user_id = id, active = request.active, "user activation updated");
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /users/{id}
pub async fn delete(
    State(store): State<Arc<dyn CredentialStore>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let found = store.delete(id).await?;
    if !found {
        return Err(ApiError::NotFound("User"));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(Json(SuccessResponse::ok()))
}

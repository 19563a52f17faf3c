/**
 * Owner Handlers
 *
 * CRUD endpoints for owner records. All of these sit behind the auth gate.
 * Single-record responses disable caching so clients never act on stale
 * owner details.
 */

use axum::{
    extract::{Path, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Json, Response},
};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::owners::db::{self, NewOwner, Owner, OwnerUpdate};
use crate::routes::responses::{IdResponse, SuccessResponse};

/// GET /owners
pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Owner>>, ApiError> {
    Ok(Json(db::list_owners(&pool).await?))
}

/// GET /owners/{user_id} — lookup by the owning user account.
pub async fn get_by_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<i64>,
) -> Result<Response, ApiError> {
    let owner = db::get_owner_by_user_id(&pool, user_id)
        .await?
        .ok_or(ApiError::NotFound("Owner"))?;

    Ok(([(CACHE_CONTROL, "no-store")], Json(owner)).into_response())
}

/// POST /owners
pub async fn create(
    State(pool): State<PgPool>,
    Json(owner): Json<NewOwner>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = db::create_owner(&pool, &owner).await?;
    Ok(Json(IdResponse { id }))
}

/// PUT /owners/{id}
pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(owner): Json<OwnerUpdate>,
) -> Result<Json<SuccessResponse>, ApiError> {
    db::update_owner(&pool, id, &owner).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /owners/{id}
pub async fn delete(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    db::delete_owner(&pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

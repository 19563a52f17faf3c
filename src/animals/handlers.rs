/**
 * Animal Handlers
 *
 * CRUD endpoints for animal records, behind the auth gate.
 */

use axum::{
    extract::{Path, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Json, Response},
};
use sqlx::PgPool;

use crate::animals::db::{self, Animal, AnimalPayload};
use crate::error::ApiError;
use crate::routes::responses::{IdResponse, SuccessResponse};

/// GET /animals
pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Animal>>, ApiError> {
    Ok(Json(db::list_animals(&pool).await?))
}

/// GET /animals/user/{user_id} — all animals owned by one user account.
pub async fn list_for_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    Ok(Json(db::list_animals_for_user(&pool, user_id).await?))
}

/// GET /animals/{id}
pub async fn get(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let animal = db::get_animal(&pool, id)
        .await?
        .ok_or(ApiError::NotFound("Animal"))?;

    Ok(([(CACHE_CONTROL, "no-store")], Json(animal)).into_response())
}

/// POST /animals
pub async fn create(
    State(pool): State<PgPool>,
    Json(animal): Json<AnimalPayload>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = db::create_animal(&pool, &animal).await?;
    Ok(Json(IdResponse { id }))
}

/// PUT /animals/{id}
pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(animal): Json<AnimalPayload>,
) -> Result<Json<SuccessResponse>, ApiError> {
    db::update_animal(&pool, id, &animal).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /animals/{id}
pub async fn delete(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    db::delete_animal(&pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

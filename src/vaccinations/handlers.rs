/**
 * Vaccination Handlers
 *
 * CRUD endpoints for vaccination records, behind the auth gate.
 * The per-animal lookup returns the animal's whole history as a list and
 * answers 404 when the animal has no recorded vaccinations.
 */

use axum::{
    extract::{Path, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Json, Response},
};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::routes::responses::{IdResponse, SuccessResponse};
use crate::vaccinations::db::{self, Vaccination, VaccinationPayload};

/// GET /vaccinations
pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Vaccination>>, ApiError> {
    Ok(Json(db::list_vaccinations(&pool).await?))
}

/// GET /vaccinations/{animal_id} — the history for one animal.
pub async fn list_for_animal(
    State(pool): State<PgPool>,
    Path(animal_id): Path<i64>,
) -> Result<Response, ApiError> {
    let vaccinations = db::list_vaccinations_for_animal(&pool, animal_id).await?;
    if vaccinations.is_empty() {
        return Err(ApiError::NotFound("Vaccination"));
    }

    Ok(([(CACHE_CONTROL, "no-store")], Json(vaccinations)).into_response())
}

/// POST /vaccinations
pub async fn create(
    State(pool): State<PgPool>,
    Json(vaccination): Json<VaccinationPayload>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = db::create_vaccination(&pool, &vaccination).await?;
    Ok(Json(IdResponse { id }))
}

/// PUT /vaccinations/{id}
pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(vaccination): Json<VaccinationPayload>,
) -> Result<Json<SuccessResponse>, ApiError> {
    db::update_vaccination(&pool, id, &vaccination).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /vaccinations/{id}
pub async fn delete(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    db::delete_vaccination(&pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

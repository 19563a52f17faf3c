/**
 * Vaccination Database Operations
 *
 * Vaccination history per animal. Lookups go by animal, returning the full
 * history for that patient.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vaccination {
    pub id: i64,
    pub animal_id: i64,
    pub vaccine_type: String,
    pub vaccine_name: String,
    pub vaccination_date: NaiveDate,
    pub valid_until: NaiveDate,
}

/// Body for creating or replacing a vaccination record.
#[derive(Debug, Deserialize)]
pub struct VaccinationPayload {
    pub animal_id: i64,
    pub vaccine_type: String,
    pub vaccine_name: String,
    pub vaccination_date: NaiveDate,
    pub valid_until: NaiveDate,
}

pub async fn list_vaccinations(pool: &PgPool) -> Result<Vec<Vaccination>, sqlx::Error> {
    sqlx::query_as::<_, Vaccination>("SELECT * FROM vaccinations ORDER BY id")
        .fetch_all(pool)
        .await
}

/// The vaccination history for one animal, oldest first.
pub async fn list_vaccinations_for_animal(
    pool: &PgPool,
    animal_id: i64,
) -> Result<Vec<Vaccination>, sqlx::Error> {
    sqlx::query_as::<_, Vaccination>(
        "SELECT * FROM vaccinations WHERE animal_id = $1 ORDER BY vaccination_date",
    )
    .bind(animal_id)
    .fetch_all(pool)
    .await
}

pub async fn create_vaccination(
    pool: &PgPool,
    vaccination: &VaccinationPayload,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO vaccinations (animal_id, vaccine_type, vaccine_name, vaccination_date, valid_until)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(vaccination.animal_id)
    .bind(&vaccination.vaccine_type)
    .bind(&vaccination.vaccine_name)
    .bind(vaccination.vaccination_date)
    .bind(vaccination.valid_until)
    .fetch_one(pool)
    .await
}

pub async fn update_vaccination(
    pool: &PgPool,
    id: i64,
    vaccination: &VaccinationPayload,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE vaccinations
        SET animal_id = $1, vaccine_type = $2, vaccine_name = $3,
            vaccination_date = $4, valid_until = $5
        WHERE id = $6
        "#,
    )
    .bind(vaccination.animal_id)
    .bind(&vaccination.vaccine_type)
    .bind(&vaccination.vaccine_name)
    .bind(vaccination.vaccination_date)
    .bind(vaccination.valid_until)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_vaccination(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM vaccinations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

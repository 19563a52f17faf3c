/**
 * Animal Database Operations
 *
 * Animal records and their queries. Animals are keyed to the owning user
 * account; microchip number and measurements are optional because not every
 * patient is chipped or measured at registration.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Animal {
    pub id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub microchip_number: Option<String>,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Body for creating or replacing an animal record.
#[derive(Debug, Deserialize)]
pub struct AnimalPayload {
    pub user_id: i64,
    pub nickname: String,
    #[serde(default)]
    pub microchip_number: Option<String>,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

pub async fn list_animals(pool: &PgPool) -> Result<Vec<Animal>, sqlx::Error> {
    sqlx::query_as::<_, Animal>("SELECT * FROM animals ORDER BY id")
        .fetch_all(pool)
        .await
}

/// All animals belonging to one user account.
pub async fn list_animals_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<Animal>, sqlx::Error> {
    sqlx::query_as::<_, Animal>("SELECT * FROM animals WHERE user_id = $1 ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn get_animal(pool: &PgPool, id: i64) -> Result<Option<Animal>, sqlx::Error> {
    sqlx::query_as::<_, Animal>("SELECT * FROM animals WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_animal(pool: &PgPool, animal: &AnimalPayload) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO animals (user_id, nickname, microchip_number, species, breed, gender,
                             birth_date, height, weight)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(animal.user_id)
    .bind(&animal.nickname)
    .bind(&animal.microchip_number)
    .bind(&animal.species)
    .bind(&animal.breed)
    .bind(&animal.gender)
    .bind(animal.birth_date)
    .bind(animal.height)
    .bind(animal.weight)
    .fetch_one(pool)
    .await
}

pub async fn update_animal(
    pool: &PgPool,
    id: i64,
    animal: &AnimalPayload,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE animals
        SET user_id = $1, nickname = $2, microchip_number = $3, species = $4, breed = $5,
            gender = $6, birth_date = $7, height = $8, weight = $9
        WHERE id = $10
        "#,
    )
    .bind(animal.user_id)
    .bind(&animal.nickname)
    .bind(&animal.microchip_number)
    .bind(&animal.species)
    .bind(&animal.breed)
    .bind(&animal.gender)
    .bind(animal.birth_date)
    .bind(animal.height)
    .bind(animal.weight)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_animal(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM animals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

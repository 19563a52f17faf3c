/**
 * Owner Database Operations
 *
 * Owner records and their queries. An owner row holds the personal details
 * of a pet-owning user account; it is keyed to `users.id` via `user_id`,
 * and single-owner lookups go through that key.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Owner {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub emso: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Body for creating an owner record.
#[derive(Debug, Deserialize)]
pub struct NewOwner {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub emso: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Body for updating an owner record. The user link is fixed at creation.
#[derive(Debug, Deserialize)]
pub struct OwnerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub emso: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
}

pub async fn list_owners(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
    sqlx::query_as::<_, Owner>("SELECT * FROM owners ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Fetch the owner record belonging to a user account.
pub async fn get_owner_by_user_id(
    pool: &PgPool,
    user_id: i64,
) -> Result<Option<Owner>, sqlx::Error> {
    sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_owner(pool: &PgPool, owner: &NewOwner) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO owners (user_id, first_name, last_name, emso, birth_date, email, phone, address)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(owner.user_id)
    .bind(&owner.first_name)
    .bind(&owner.last_name)
    .bind(&owner.emso)
    .bind(owner.birth_date)
    .bind(&owner.email)
    .bind(&owner.phone)
    .bind(&owner.address)
    .fetch_one(pool)
    .await
}

pub async fn update_owner(pool: &PgPool, id: i64, owner: &OwnerUpdate) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE owners
        SET first_name = $1, last_name = $2, emso = $3, birth_date = $4,
            email = $5, phone = $6, address = $7
        WHERE id = $8
        "#,
    )
    .bind(&owner.first_name)
    .bind(&owner.last_name)
    .bind(&owner.emso)
    .bind(owner.birth_date)
    .bind(&owner.email)
    .bind(&owner.phone)
    .bind(&owner.address)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_owner(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM owners WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

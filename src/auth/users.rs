/**
 * User Model and Credential Store
 *
 * This module defines the user credential record, the closed role set, and
 * the store through which all credential reads and writes go.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use thiserror::Error;

/// Account role. Closed set; anything else is rejected at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Owner,
    Vet,
    Admin,
}

impl Role {
    /// Parse a role from its wire representation. Returns `None` for
    /// anything outside the closed set (case-sensitive, like the original).
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "vet" => Some(Self::Vet),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Vet => "vet",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User struct representing a credential record in the database
///
/// The password hash is bcrypt output and never leaves the server;
/// admin-facing responses copy the other fields into a summary type.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store on creation
    pub id: i64,
    /// Username (unique, case-sensitive)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Account role
    pub role: Role,
    /// Activation gate: must be true for login to succeed
    pub active: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new credential record.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub active: bool,
}

/// Credential store errors
///
/// Uniqueness violations are surfaced distinctly so the signup flow can
/// answer 409 instead of a generic failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    DuplicateUsername,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Store through which all credential reads and writes go.
///
/// The Postgres implementation is the production store; tests use an
/// in-memory implementation so the auth flows run without a database.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new credential record, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateUsername`] when the username is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Look up a credential by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// List all credential records.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Update a user's role. Returns false if no such user exists.
    async fn update_role(&self, id: i64, role: Role) -> Result<bool, StoreError>;

    /// Set the activation flag. Returns false if no such user exists.
    async fn set_active(&self, id: i64, active: bool) -> Result<bool, StoreError>;

    /// Delete a credential record. Returns false if no such user exists.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// Postgres-backed credential store.
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role, active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password_hash, role, active, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .bind(new_user.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateUsername
            }
            _ => StoreError::Database(err),
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, active, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, active, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update_role(&self, id: i64, role: Role) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE users SET role = $1 WHERE id = $2")
            .bind(role)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE users SET active = $1 WHERE id = $2")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("owner"), Some(Role::Owner));
        assert_eq!(Role::from_str("vet"), Some(Role::Vet));
        assert_eq!(Role::from_str("admin"), Some(Role::Admin));
        assert_eq!(Role::from_str("superuser"), None);
        assert_eq!(Role::from_str(""), None);
    }

    #[test]
    fn test_role_is_case_sensitive() {
        assert_eq!(Role::from_str("Owner"), None);
        assert_eq!(Role::from_str("ADMIN"), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Owner, Role::Vet, Role::Admin] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
    }
}

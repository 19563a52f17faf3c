//! In-memory credential store for tests.
//!
//! Lets the signup/login flows, the auth gate, and the admin handlers run
//! without a database. Mirrors the Postgres store's observable behavior,
//! including the uniqueness violation on duplicate usernames.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::auth::users::{CredentialStore, NewUser, Role, StoreError, User};

pub struct MemoryCredentialStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.username == new_user.username) {
            return Err(StoreError::DuplicateUsername);
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            active: new_user.active,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_role(&self, id: i64, role: Role) -> Result<bool, StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, StoreError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryCredentialStore::new();
        let new_user = NewUser {
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Owner,
            active: true,
        };

        store.create(new_user.clone()).await.unwrap();
        let result = store.create(new_user).await;
        assert!(matches!(result, Err(StoreError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let store = MemoryCredentialStore::new();
        for (index, name) in ["a", "b", "c"].iter().enumerate() {
            let user = store
                .create(NewUser {
                    username: (*name).to_string(),
                    password_hash: "hash".to_string(),
                    role: Role::Vet,
                    active: false,
                })
                .await
                .unwrap();
            assert_eq!(user.id, index as i64 + 1);
        }
    }

    #[tokio::test]
    async fn test_update_on_missing_user_reports_not_found() {
        let store = MemoryCredentialStore::new();
        assert!(!store.set_active(99, true).await.unwrap());
        assert!(!store.update_role(99, Role::Admin).await.unwrap());
        assert!(!store.delete(99).await.unwrap());
    }
}

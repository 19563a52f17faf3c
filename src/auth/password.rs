/**
 * Password Hashing
 *
 * bcrypt hashing and verification for account passwords. The work factor is
 * fixed at 10. bcrypt is CPU-bound, so both operations run on the blocking
 * thread pool and never stall the async runtime.
 */

use thiserror::Error;

/// bcrypt work factor.
const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task was cancelled")]
    Cancelled,
}

/// Hash a plaintext password with bcrypt.
///
/// Never fails for well-formed input; empty input is an error.
pub async fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    if plaintext.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }

    let plaintext = plaintext.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, BCRYPT_COST))
        .await
        .map_err(|_| PasswordError::Cancelled)??;

    Ok(hash)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A mismatch is `Ok(false)`, not an error; only a malformed hash fails.
pub async fn verify_password(plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
    let plaintext = plaintext.to_owned();
    let hash = hash.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
        .await
        .map_err(|_| PasswordError::Cancelled)??;

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("pw123").await.unwrap();
        assert!(verify_password("pw123", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("pw123").await.unwrap();
        assert!(!verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_password_is_rejected() {
        let result = hash_password("").await;
        assert!(matches!(result, Err(PasswordError::EmptyPassword)));
    }

    #[tokio::test]
    async fn test_hash_uses_cost_ten() {
        let hash = hash_password("pw123").await.unwrap();
        // bcrypt hashes embed the cost: $2b$10$...
        assert!(hash.contains("$10$"), "unexpected hash format: {hash}");
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let first = hash_password("pw123").await.unwrap();
        let second = hash_password("pw123").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("pw123", "not-a-bcrypt-hash").await;
        assert!(result.is_err());
    }
}

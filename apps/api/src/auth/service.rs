//! Registration, login and token verification.

use anyhow::anyhow;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password, ABSENT_USER_HASH};
use crate::auth::token::TokenKeys;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::store::UserStore;

#[derive(Debug, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Creates a user with an Argon2id password hash.
/// Fails with `DuplicateEmail` if the email is already registered.
pub async fn register(
    users: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<UserRow, AppError> {
    let email = normalize_email(email)?;
    if password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }

    if users.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password = password.to_owned();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| anyhow!("password hashing task failed: {e}"))?
        .map_err(|e| anyhow!("password hashing failed: {e}"))?;

    let user = users
        .insert_user(&email, &password_hash)
        .await?
        .ok_or(AppError::DuplicateEmail)?;

    info!(user_id = user.id, email = %user.email, "Registered user");
    Ok(user)
}

/// Checks credentials and issues a bearer token. Writes nothing.
pub async fn authenticate(
    users: &dyn UserStore,
    keys: &TokenKeys,
    email: &str,
    password: &str,
) -> Result<AccessToken, AppError> {
    let email = email.trim();
    let user = users.find_user_by_email(email).await?;

    // Unknown emails verify against ABSENT_USER_HASH: every login runs Argon2 once.
    let password = password.to_owned();
    let stored_hash = user
        .as_ref()
        .map_or_else(|| ABSENT_USER_HASH.to_string(), |u| u.password_hash.clone());
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| anyhow!("password verification task failed: {e}"))?;

    let user = match user {
        Some(user) if matches => user,
        Some(_) => {
            warn!(email, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }
        None => {
            warn!(email, "Login failed: unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    let access_token = keys
        .issue(&user.email)
        .map_err(|e| anyhow!("token signing failed: {e}"))?;

    Ok(AccessToken {
        access_token,
        token_type: "bearer",
    })
}

/// Resolves a bearer token to its user. Bad signature, expiry and unknown
/// users all collapse into `InvalidToken`.
pub async fn verify(
    users: &dyn UserStore,
    keys: &TokenKeys,
    token: &str,
) -> Result<UserRow, AppError> {
    let claims = keys.verify(token).map_err(|e| {
        warn!(error = %e, "Rejected bearer token");
        AppError::InvalidToken
    })?;

    users
        .find_user_by_email(&claims.sub)
        .await?
        .ok_or(AppError::InvalidToken)
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::store::memory::MemoryStore;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"service-test-secret", Duration::minutes(30))
    }

    #[tokio::test]
    async fn test_register_twice_is_duplicate() {
        let store = MemoryStore::default();
        register(&store, "a@x.com", "pw").await.unwrap();
        let err = register(&store, "a@x.com", "other").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_register_never_stores_raw_password() {
        let store = MemoryStore::default();
        register(&store, "a@x.com", "hunter22").await.unwrap();
        let stored = store.user("a@x.com").unwrap();
        assert_ne!(stored.password_hash, "hunter22");
        assert!(!stored.password_hash.contains("hunter22"));
    }

    #[tokio::test]
    async fn test_register_trims_email() {
        let store = MemoryStore::default();
        let user = register(&store, "  a@x.com ", "pw").await.unwrap();
        assert_eq!(user.email, "a@x.com");
        let err = register(&store, "a@x.com", "pw").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let store = MemoryStore::default();
        assert!(matches!(
            register(&store, "   ", "pw").await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            register(&store, "a@x.com", "").await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_then_verify_same_user() {
        let store = MemoryStore::default();
        let keys = keys();
        let registered = register(&store, "a@x.com", "pw").await.unwrap();

        let token = authenticate(&store, &keys, "a@x.com", "pw").await.unwrap();
        assert_eq!(token.token_type, "bearer");

        let user = verify(&store, &keys, &token.access_token).await.unwrap();
        assert_eq!(user.id, registered.id);
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_authenticate_bad_credentials() {
        let store = MemoryStore::default();
        let keys = keys();
        register(&store, "a@x.com", "pw").await.unwrap();

        let wrong_pw = authenticate(&store, &keys, "a@x.com", "nope").await;
        assert!(matches!(wrong_pw, Err(AppError::InvalidCredentials)));

        let unknown = authenticate(&store, &keys, "b@x.com", "pw").await;
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_verify_expired_token() {
        let store = MemoryStore::default();
        let keys = keys();
        register(&store, "a@x.com", "pw").await.unwrap();

        let expired = keys.issue_with_ttl("a@x.com", Duration::seconds(-1)).unwrap();
        let err = verify(&store, &keys, &expired).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[tokio::test]
    async fn test_verify_token_for_unknown_user() {
        let store = MemoryStore::default();
        let keys = keys();
        let token = keys.issue("ghost@x.com").unwrap();
        let err = verify(&store, &keys, &token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}

//! Account registration and authentication

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::db::tables::ClientTable;
use crate::models::Client;
use crate::utils::auth::{generate_salt, hash_password, verify_password};

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 32;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid pattern"));

/// Expected registration failures, returned as values rather than panics
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("invalid username")]
    InvalidUsername,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid password")]
    InvalidPassword,
    #[error("failed to persist client: {0}")]
    Persistence(anyhow::Error),
}

/// Registration and login functions
pub struct Accounts;

impl Accounts {
    /// Register a new client
    ///
    /// The validation pipeline short-circuits in order: username shape,
    /// username taken, password shape. The taken-check and the insert are two
    /// separate store calls, so concurrent registrations with the same name
    /// can both pass the check; the NOCASE unique index decides the race and
    /// the losing insert is reported as `UsernameTaken` as well.
    pub async fn register(username: &str, password: &str) -> Result<Client, RegisterError> {
        let username = username.trim();
        let len = username.chars().count();
        if len < USERNAME_MIN_LEN || len > USERNAME_MAX_LEN || !USERNAME_PATTERN.is_match(username)
        {
            return Err(RegisterError::InvalidUsername);
        }

        let existing = ClientTable::find_by_username(username)
            .await
            .map_err(RegisterError::Persistence)?;
        if !existing.is_empty() {
            return Err(RegisterError::UsernameTaken);
        }

        if password.trim().is_empty() {
            return Err(RegisterError::InvalidPassword);
        }

        let salt = generate_salt();
        let hash = hash_password(&salt, password).map_err(RegisterError::Persistence)?;

        // empty bio and sentinel avatar come from Client::new
        let mut client = Client::new(username.to_string(), hash, salt);

        match ClientTable::insert(&client).await {
            Ok(id) => {
                client.id = id;
                Ok(client)
            }
            Err(e) if is_unique_violation(&e) => Err(RegisterError::UsernameTaken),
            Err(e) => Err(RegisterError::Persistence(e)),
        }
    }

    /// Verify a username/password pair
    ///
    /// Username lookup is case-insensitive. Uniqueness is enforced at write
    /// time, so if the store ever returns more than one row the first match
    /// is used rather than erroring.
    pub async fn authenticate(username: &str, password: &str) -> Result<bool> {
        let matches = ClientTable::find_by_username(username).await?;

        match matches.into_iter().next() {
            Some(client) => verify_password(&client.salt, password, &client.password),
            None => Ok(false),
        }
    }
}

/// Check whether an opaque store error is a unique-constraint violation
pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db)) if db.is_unique_violation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testdb;

    #[tokio::test]
    async fn test_register_and_authenticate() {
        testdb::setup().await;

        let client = Accounts::register("acct_alice", "secret").await.unwrap();
        assert!(client.id > 0);
        assert_eq!(client.username, "acct_alice");
        assert!(client.bio.is_empty());
        assert_eq!(client.image, crate::models::DEFAULT_AVATAR);

        assert!(Accounts::authenticate("acct_alice", "secret").await.unwrap());
        assert!(!Accounts::authenticate("acct_alice", "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_authenticate_is_case_insensitive() {
        testdb::setup().await;

        Accounts::register("acct_Bob", "hunter2").await.unwrap();

        assert!(Accounts::authenticate("ACCT_BOB", "hunter2").await.unwrap());
        assert!(Accounts::authenticate("acct_bob", "hunter2").await.unwrap());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        testdb::setup().await;

        assert!(!Accounts::authenticate("acct_nobody", "whatever")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_case_insensitive() {
        testdb::setup().await;

        Accounts::register("acct_carol", "pw").await.unwrap();

        let err = Accounts::register("ACCT_CAROL", "pw").await.unwrap_err();
        assert!(matches!(err, RegisterError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_invalid_usernames() {
        testdb::setup().await;

        for bad in ["", "  ", "ab", "has space", "ümläut", &"x".repeat(33)] {
            let err = Accounts::register(bad, "pw").await.unwrap_err();
            assert!(matches!(err, RegisterError::InvalidUsername), "{:?}", bad);
        }

        // trimming happens before the length check
        let client = Accounts::register("  acct_dave  ", "pw").await.unwrap();
        assert_eq!(client.username, "acct_dave");
    }

    #[tokio::test]
    async fn test_write_time_duplicate_maps_to_taken() {
        testdb::setup().await;

        // two racing registrations can both pass the pre-check; the second
        // insert then trips the NOCASE unique index and must read as taken
        let client = Client::new("acct_race".to_string(), "h".to_string(), "s".to_string());
        ClientTable::insert(&client).await.unwrap();

        let err = ClientTable::insert(&client).await.unwrap_err();
        assert!(is_unique_violation(&err));

        // an unrelated store failure is not mistaken for a duplicate
        assert!(!is_unique_violation(&anyhow::anyhow!("connection lost")));

        let err = Accounts::register("acct_race", "pw").await.unwrap_err();
        assert!(matches!(err, RegisterError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_invalid_password() {
        testdb::setup().await;

        let err = Accounts::register("acct_erin", "").await.unwrap_err();
        assert!(matches!(err, RegisterError::InvalidPassword));

        let err = Accounts::register("acct_erin", "   ").await.unwrap_err();
        assert!(matches!(err, RegisterError::InvalidPassword));

        // validation order: taken-check runs before the password check
        Accounts::register("acct_frank", "pw").await.unwrap();
        let err = Accounts::register("acct_frank", "").await.unwrap_err();
        assert!(matches!(err, RegisterError::UsernameTaken));
    }
}

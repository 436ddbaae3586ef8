//! Email/password login for the admin panel.
//!
//! Logging in establishes identity only. Whether that identity may use the
//! panel is decided per request by the route guard's role lookup, so a
//! non-admin can hold a perfectly valid session and still be denied.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;
use thiserror::Error;

use crate::db::{RepositoryError, identities};
use crate::models::CurrentIdentity;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair did not match an identity.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Session store operation failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing failed.
    #[error("password hash error")]
    Hash(#[from] RepositoryError),
}

/// Verify an email/password pair and return the session identity.
///
/// A missing identity and a wrong password are indistinguishable to the
/// caller.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on any mismatch, or wraps the
/// repository error for store failures.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<CurrentIdentity, AuthError> {
    let record = identities::find_by_email(pool, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    verify_password(password, &record.password_hash)?;

    Ok(CurrentIdentity {
        uid: record.uid,
        email: record.email,
        display_name: record.display_name,
    })
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` never; hashing failures map to
/// `AuthError::Hash` via a corruption report.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(RepositoryError::DataCorruption(e.to_string())))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).is_ok());
        assert!(verify_password("wrong password", &hash).is_err());
    }

    #[test]
    fn test_garbage_hash_is_invalid_credentials() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}

//! Identity-table access for admin login.

use noor_core::Uid;
use sqlx::PgPool;

use super::RepositoryError;

/// One row of the `identity` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IdentityRecord {
    pub uid: Uid,
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: String,
}

/// Find an identity by email (case-insensitive).
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure.
pub async fn find_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<IdentityRecord>, RepositoryError> {
    let row = sqlx::query_as::<_, IdentityRecord>(
        "SELECT uid, email, display_name, password_hash
         FROM identity
         WHERE lower(email) = lower($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Create an identity.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` when the email or uid is taken.
pub async fn insert(
    pool: &PgPool,
    uid: &Uid,
    email: &str,
    display_name: Option<&str>,
    password_hash: &str,
) -> Result<(), RepositoryError> {
    sqlx::query(
        "INSERT INTO identity (uid, email, display_name, password_hash)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(uid)
    .bind(email)
    .bind(display_name)
    .bind(password_hash)
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::from_sqlx(e, &format!("identity {email}")))?;

    Ok(())
}

//! Database operations for the admin panel.
//!
//! The admin panel writes the same `document` table the public site reads.
//! Edits from the content screens go through the detached write helpers so
//! the UI never blocks on the store; deletes are the exception and stay
//! synchronous because the UI confirms them explicitly.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p noor-cli -- migrate
//! ```

pub mod documents;
pub mod identities;
pub mod roles;

use std::time::Duration;

use noor_core::{PermissionError, StoreOperation};
use noor_relay::PermissionRelay;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// SQLSTATE for `insufficient_privilege`.
const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

/// SQLSTATE for `unique_violation`.
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested document was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Constraint violation (e.g., duplicate id).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Whether this failure is the store rejecting the caller's privilege.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err
                .code()
                .is_some_and(|code| code == SQLSTATE_INSUFFICIENT_PRIVILEGE),
            _ => false,
        }
    }

    /// Translate a raw sqlx error, folding unique violations into `Conflict`.
    #[must_use]
    pub fn from_sqlx(err: sqlx::Error, what: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.code().is_some_and(|c| c == SQLSTATE_UNIQUE_VIOLATION)
        {
            return Self::Conflict(what.to_string());
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Spawn a document create without waiting for the outcome.
///
/// On a permission rejection the full request payload is published on the
/// relay so the events stream can show what was refused.
pub fn detach_create(
    pool: PgPool,
    relay: PermissionRelay,
    collection: &'static str,
    id: noor_core::DocId,
    data: serde_json::Value,
) {
    tokio::spawn(async move {
        let path = format!("{collection}/{id}");
        match documents::insert_document(&pool, collection, &id, &data).await {
            Ok(()) => tracing::debug!(path = %path, "detached create committed"),
            Err(err) if err.is_permission_denied() => {
                relay.publish(
                    PermissionError::new(StoreOperation::Create, path).with_request_data(data),
                );
            }
            Err(err) => {
                tracing::error!(path = %path, error = %err, "detached create failed");
            }
        }
    });
}

/// Spawn a document merge-update without waiting for the outcome.
///
/// Missing documents are upserted; the content screens treat "save" as
/// set-with-merge.
pub fn detach_update(
    pool: PgPool,
    relay: PermissionRelay,
    collection: &'static str,
    id: noor_core::DocId,
    data: serde_json::Value,
) {
    tokio::spawn(async move {
        let path = format!("{collection}/{id}");
        match documents::upsert_document(&pool, collection, &id, &data).await {
            Ok(()) => tracing::debug!(path = %path, "detached update committed"),
            Err(err) if err.is_permission_denied() => {
                relay.publish(
                    PermissionError::new(StoreOperation::Update, path).with_request_data(data),
                );
            }
            Err(err) => {
                tracing::error!(path = %path, error = %err, "detached update failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_permission_denied() {
        assert!(!RepositoryError::NotFound("media/1".to_string()).is_permission_denied());
    }

    #[test]
    fn test_from_sqlx_passthrough() {
        let err = RepositoryError::from_sqlx(sqlx::Error::PoolTimedOut, "document x");
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}

//! Database operations for the public site.
//!
//! Everything content-shaped lives in the shared `document` table
//! (`collection`, `id`, `data` JSONB, timestamps). This binary mostly reads;
//! its only writes are the public contact and donation submissions, which go
//! through [`detach_write`] so the request never waits on the store.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p noor-cli -- migrate
//! ```

use std::time::Duration;

use noor_core::{PermissionError, StoreOperation};
use noor_relay::PermissionRelay;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod catalog;
pub mod content;
pub mod documents;

/// SQLSTATE for `insufficient_privilege`.
const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Errors from the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored document exists but does not match the expected shape.
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// Document not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl RepositoryError {
    /// Whether this failure is the store rejecting the caller's privilege.
    ///
    /// Only this class is relayed to the permission-error channel; everything
    /// else gets a log line with a retry hint instead.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err
                .code()
                .is_some_and(|code| code == SQLSTATE_INSUFFICIENT_PRIVILEGE),
            _ => false,
        }
    }

    /// Whether this failure is transient (pool exhausted, connection lost).
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_))
        )
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

/// Spawn a document create and return immediately.
///
/// The handler that calls this has already validated the payload and moved
/// on; it never learns the outcome. A permission rejection is published on
/// the relay with the full request payload so the error surface can explain
/// exactly what was refused. Transient failures only get a log line.
pub fn detach_write(
    pool: PgPool,
    relay: PermissionRelay,
    collection: &'static str,
    id: noor_core::DocId,
    data: serde_json::Value,
) {
    tokio::spawn(async move {
        let path = format!("{collection}/{id}");
        match documents::insert_document(&pool, collection, &id, &data).await {
            Ok(()) => {
                tracing::debug!(path = %path, "detached write committed");
            }
            Err(err) if err.is_permission_denied() => {
                relay.publish(
                    PermissionError::new(StoreOperation::Create, path).with_request_data(data),
                );
            }
            Err(err) => {
                let hint = if err.is_unavailable() {
                    "store unavailable, submission lost; retry later"
                } else {
                    "submission lost"
                };
                tracing::error!(path = %path, error = %err, "detached write failed: {hint}");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_permission_denied() {
        assert!(!RepositoryError::NotFound("page_content/home".to_string()).is_permission_denied());
        assert!(
            !RepositoryError::DataCorruption("bad shape".to_string()).is_permission_denied()
        );
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        assert!(RepositoryError::Database(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(!RepositoryError::NotFound("x".to_string()).is_unavailable());
    }
}

//! Generic access to the `document` table.
//!
//! Collections are untyped at this layer; the typed repositories in
//! [`super::catalog`] and [`super::content`] deserialize `data` into the
//! shared payload types.

use chrono::{DateTime, Utc};
use noor_core::DocId;
use sqlx::PgPool;

use super::RepositoryError;

/// One row of the `document` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoredDocument {
    pub id: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Point lookup of a single document.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure.
pub async fn get_document(
    pool: &PgPool,
    collection: &str,
    id: &str,
) -> Result<Option<StoredDocument>, RepositoryError> {
    let row = sqlx::query_as::<_, StoredDocument>(
        "SELECT id, data, created_at, updated_at
         FROM document
         WHERE collection = $1 AND id = $2",
    )
    .bind(collection)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// List every document in a collection, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure.
pub async fn list_documents(
    pool: &PgPool,
    collection: &str,
) -> Result<Vec<StoredDocument>, RepositoryError> {
    let rows = sqlx::query_as::<_, StoredDocument>(
        "SELECT id, data, created_at, updated_at
         FROM document
         WHERE collection = $1
         ORDER BY created_at DESC",
    )
    .bind(collection)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new document. Timestamps are assigned by the database, never
/// by the caller.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure, including unique
/// violations when the id already exists.
pub async fn insert_document(
    pool: &PgPool,
    collection: &str,
    id: &DocId,
    data: &serde_json::Value,
) -> Result<(), RepositoryError> {
    sqlx::query(
        "INSERT INTO document (collection, id, data, created_at, updated_at)
         VALUES ($1, $2, $3, now(), now())",
    )
    .bind(collection)
    .bind(id.as_str())
    .bind(data)
    .execute(pool)
    .await?;

    Ok(())
}

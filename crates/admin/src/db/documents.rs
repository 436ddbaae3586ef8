//! Full read/write access to the `document` table.

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

/// Whether a document exists. Contents are not fetched.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure.
pub async fn document_exists(
    pool: &PgPool,
    collection: &str,
    id: &str,
) -> Result<bool, RepositoryError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM document WHERE collection = $1 AND id = $2)",
    )
    .bind(collection)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
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

/// Count the documents in a collection.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure.
pub async fn count_documents(pool: &PgPool, collection: &str) -> Result<i64, RepositoryError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT count(*) FROM document WHERE collection = $1",
    )
    .bind(collection)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Insert a new document. Fails with `Conflict` if the id is taken.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` on a duplicate id, or `Database`
/// for any other failure.
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
    .await
    .map_err(|e| RepositoryError::from_sqlx(e, &format!("{collection}/{id}")))?;

    Ok(())
}

/// Merge-update a document, creating it when absent.
///
/// Existing keys not present in `data` survive; this is set-with-merge,
/// the shape every content screen saves with.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure.
pub async fn upsert_document(
    pool: &PgPool,
    collection: &str,
    id: &DocId,
    data: &serde_json::Value,
) -> Result<(), RepositoryError> {
    sqlx::query(
        "INSERT INTO document (collection, id, data, created_at, updated_at)
         VALUES ($1, $2, $3, now(), now())
         ON CONFLICT (collection, id)
         DO UPDATE SET data = document.data || EXCLUDED.data, updated_at = now()",
    )
    .bind(collection)
    .bind(id.as_str())
    .bind(data)
    .execute(pool)
    .await?;

    Ok(())
}

/// Replace a document's payload entirely.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` when the document does not exist.
pub async fn replace_document(
    pool: &PgPool,
    collection: &str,
    id: &str,
    data: &serde_json::Value,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        "UPDATE document SET data = $3, updated_at = now()
         WHERE collection = $1 AND id = $2",
    )
    .bind(collection)
    .bind(id)
    .bind(data)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound(format!("{collection}/{id}")));
    }
    Ok(())
}

/// Delete a document.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` when the document does not exist.
pub async fn delete_document(
    pool: &PgPool,
    collection: &str,
    id: &str,
) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM document WHERE collection = $1 AND id = $2")
        .bind(collection)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound(format!("{collection}/{id}")));
    }
    Ok(())
}

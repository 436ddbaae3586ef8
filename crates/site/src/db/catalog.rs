//! Read repositories for the public catalog collections: programs, posts,
//! board members and organizational documents.
//!
//! Each function deserializes the JSONB payload into its shared typed shape
//! and carries the document id alongside so the frontend can link to it.

use noor_core::{BoardMember, OrgDocument, Post, Program, collections};
use serde::Serialize;
use sqlx::PgPool;

use super::{RepositoryError, documents};

/// A typed payload together with its document id.
#[derive(Debug, Clone, Serialize)]
pub struct Keyed<T> {
    pub id: String,
    #[serde(flatten)]
    pub item: T,
}

fn decode<T: serde::de::DeserializeOwned>(
    collection: &str,
    row: documents::StoredDocument,
) -> Result<Keyed<T>, RepositoryError> {
    let item = serde_json::from_value(row.data)
        .map_err(|e| RepositoryError::DataCorruption(format!("{collection}/{}: {e}", row.id)))?;
    Ok(Keyed { id: row.id, item })
}

/// List all programs, newest first.
///
/// # Errors
///
/// Returns `RepositoryError` on query failure or a payload that does not
/// deserialize.
pub async fn list_programs(pool: &PgPool) -> Result<Vec<Keyed<Program>>, RepositoryError> {
    documents::list_documents(pool, collections::PROGRAMS)
        .await?
        .into_iter()
        .map(|row| decode(collections::PROGRAMS, row))
        .collect()
}

/// List all news posts, newest first.
///
/// # Errors
///
/// Returns `RepositoryError` on query failure or a payload that does not
/// deserialize.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Keyed<Post>>, RepositoryError> {
    documents::list_documents(pool, collections::POSTS)
        .await?
        .into_iter()
        .map(|row| decode(collections::POSTS, row))
        .collect()
}

/// Find a news post by its slug.
///
/// Slugs are unique by construction in the admin panel; if duplicates ever
/// appear the newest wins.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` when no post carries the slug.
pub async fn post_by_slug(pool: &PgPool, slug: &str) -> Result<Keyed<Post>, RepositoryError> {
    let row = sqlx::query_as::<_, documents::StoredDocument>(
        "SELECT id, data, created_at, updated_at
         FROM document
         WHERE collection = $1 AND data->>'slug' = $2
         ORDER BY created_at DESC
         LIMIT 1",
    )
    .bind(collections::POSTS)
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepositoryError::NotFound(format!("posts with slug {slug}")))?;

    decode(collections::POSTS, row)
}

/// List board members ordered for the governance page.
///
/// # Errors
///
/// Returns `RepositoryError` on query failure or a payload that does not
/// deserialize.
pub async fn list_board_members(
    pool: &PgPool,
) -> Result<Vec<Keyed<BoardMember>>, RepositoryError> {
    let rows = sqlx::query_as::<_, documents::StoredDocument>(
        "SELECT id, data, created_at, updated_at
         FROM document
         WHERE collection = $1
         ORDER BY (data->>'displayOrder')::int NULLS LAST, created_at",
    )
    .bind(collections::BOARD_MEMBERS)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| decode(collections::BOARD_MEMBERS, row))
        .collect()
}

/// List organizational documents (bylaws, reports), newest first.
///
/// # Errors
///
/// Returns `RepositoryError` on query failure or a payload that does not
/// deserialize.
pub async fn list_org_documents(
    pool: &PgPool,
) -> Result<Vec<Keyed<OrgDocument>>, RepositoryError> {
    documents::list_documents(pool, collections::DOCUMENTS)
        .await?
        .into_iter()
        .map(|row| decode(collections::DOCUMENTS, row))
        .collect()
}

//! Page content lookups.

use noor_core::{ContentDocument, collections};
use sqlx::PgPool;

use super::{RepositoryError, documents};
use crate::state::AppState;

/// Fetch the content override document for a page key, if one exists.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure. A document whose
/// `data` column is not even an object is reported as corruption; malformed
/// language sub-maps inside an otherwise-valid document are tolerated
/// downstream by the resolver.
pub async fn fetch_page_content(
    pool: &PgPool,
    page_key: &str,
) -> Result<Option<ContentDocument>, RepositoryError> {
    let Some(row) = documents::get_document(pool, collections::PAGE_CONTENT, page_key).await?
    else {
        return Ok(None);
    };

    let mut document: ContentDocument = serde_json::from_value(row.data).map_err(|e| {
        RepositoryError::DataCorruption(format!("page_content/{page_key}: {e}"))
    })?;
    document.updated_at = Some(row.updated_at);

    Ok(Some(document))
}

/// Fetch the content override for a page, going through the state's cache.
///
/// The absence of an override is cached too, so pages with no remote
/// document don't hit the store on every render.
///
/// # Errors
///
/// Returns `RepositoryError` when the underlying fetch fails; failures are
/// not cached.
pub async fn cached_page_content(
    state: &AppState,
    page_key: &str,
) -> Result<Option<ContentDocument>, RepositoryError> {
    if let Some(cached) = state.content_cache().get(page_key).await {
        return Ok(cached);
    }

    let fetched = fetch_page_content(state.pool(), page_key).await?;
    state
        .content_cache()
        .insert(page_key.to_owned(), fetched.clone())
        .await;

    Ok(fetched)
}

//! Page-content editing.
//!
//! Every public page key can carry one content document. The editor loads
//! either the stored document or the static template, saves with a
//! fire-and-forget merge, and can explicitly seed a fresh document from
//! the static text for a page that has never been edited.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use noor_core::{ContentDocument, DocId, Language, collections, static_fallback};

use crate::db::{detach_update, documents};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::crud::WriteAccepted;
use crate::state::AppState;

/// Build the pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list))
        .route("/pages/{key}", get(show).put(save))
        .route("/pages/{key}/seed", post(seed))
}

/// One page key's override status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatus {
    pub key: &'static str,
    /// Whether a stored content document overrides the static text.
    pub has_override: bool,
}

/// GET /pages - every page key with its override status.
async fn list(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<PageStatus>>> {
    let mut statuses = Vec::with_capacity(collections::PAGE_KEYS.len());
    for key in collections::PAGE_KEYS {
        let has_override =
            documents::document_exists(state.pool(), collections::PAGE_CONTENT, key).await?;
        statuses.push(PageStatus { key, has_override });
    }
    Ok(Json(statuses))
}

/// The editor payload for one page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEditor {
    pub key: String,
    /// The stored document, or the static template when none exists.
    pub content: ContentDocument,
    pub has_override: bool,
}

/// GET /pages/{key} - the content document, falling back to the template.
async fn show(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<PageEditor>> {
    let fallback =
        static_fallback(&key).ok_or_else(|| AppError::NotFound(format!("pages/{key}")))?;

    let stored = documents::get_document(state.pool(), collections::PAGE_CONTENT, &key).await?;
    let (content, has_override) = match stored {
        Some(row) => {
            let mut document: ContentDocument = serde_json::from_value(row.data)
                .map_err(|e| AppError::Internal(format!("page_content/{key}: {e}")))?;
            document.updated_at = Some(row.updated_at);
            (document, true)
        }
        None => (
            ContentDocument::from_maps(
                &fallback.map(Language::En),
                &fallback.map(Language::Ar),
            ),
            false,
        ),
    };

    Ok(Json(PageEditor {
        key,
        content,
        has_override,
    }))
}

/// PUT /pages/{key} - save content, fire-and-forget.
async fn save(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(content): Json<ContentDocument>,
) -> Result<(StatusCode, Json<WriteAccepted>)> {
    if static_fallback(&key).is_none() {
        return Err(AppError::NotFound(format!("pages/{key}")));
    }

    let data =
        serde_json::to_value(&content).map_err(|e| AppError::Internal(e.to_string()))?;
    let accepted = WriteAccepted { id: key.clone() };

    detach_update(
        state.pool().clone(),
        state.relay().clone(),
        collections::PAGE_CONTENT,
        DocId::from_key(key),
        data,
    );

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// POST /pages/{key}/seed - create a content document from the static text.
///
/// Blocking on purpose: seeding is an explicit one-shot action whose
/// outcome (including "already seeded") the editor shows inline.
async fn seed(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<PageEditor>)> {
    let fallback =
        static_fallback(&key).ok_or_else(|| AppError::NotFound(format!("pages/{key}")))?;

    let content = ContentDocument::from_maps(
        &fallback.map(Language::En),
        &fallback.map(Language::Ar),
    );
    let data =
        serde_json::to_value(&content).map_err(|e| AppError::Internal(e.to_string()))?;

    documents::insert_document(
        state.pool(),
        collections::PAGE_CONTENT,
        &DocId::from_key(key.as_str()),
        &data,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(PageEditor {
            key,
            content,
            has_override: true,
        }),
    ))
}

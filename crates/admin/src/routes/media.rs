//! Media library: multipart upload, listing, and blocking delete.
//!
//! Upload writes the blob first, then the metadata record; delete runs in
//! the opposite order and tolerates a blob that is already gone, so the
//! record never points at nothing for longer than one failed request.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::Utc;

use noor_core::{DocId, MediaItem, collections};

use crate::db::{RepositoryError, documents};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::crud::{self, Keyed};
use crate::state::AppState;

/// Largest accepted upload, in bytes.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the media router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media", get(list).post(upload))
        .route("/media/{id}", axum::routing::delete(remove))
}

/// GET /media - every media record, newest first.
async fn list(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Keyed<MediaItem>>>> {
    Ok(Json(
        crud::list_typed(state.pool(), collections::MEDIA).await?,
    ))
}

/// POST /media - multipart upload.
///
/// Expects a single `file` part. Blocking: the admin needs the served URL
/// back to place the image somewhere.
async fn upload(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Keyed<MediaItem>>)> {
    let mut uploaded: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| AppError::BadRequest("file part needs a filename".to_string()))?;
        let content_type = field
            .content_type()
            .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        uploaded = Some((file_name, content_type, bytes.to_vec()));
    }

    let Some((file_name, content_type, bytes)) = uploaded else {
        return Err(AppError::BadRequest("missing file part".to_string()));
    };
    if bytes.is_empty() {
        return Err(AppError::BadRequest("file is empty".to_string()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest("file is too large".to_string()));
    }

    // Blob first, record second.
    let blob = state.media().save(&file_name, &bytes).await?;

    let item = MediaItem {
        file_name,
        image_url: blob.public_url,
        storage_path: blob.storage_path,
        content_type,
        size: i64::try_from(bytes.len()).unwrap_or(i64::MAX),
        upload_date: Utc::now(),
    };
    let data = serde_json::to_value(&item).map_err(|e| AppError::Internal(e.to_string()))?;

    let id = DocId::generate();
    documents::insert_document(state.pool(), collections::MEDIA, &id, &data).await?;

    tracing::info!(id = %id, path = %item.storage_path, "media uploaded");

    Ok((
        StatusCode::CREATED,
        Json(Keyed {
            id: id.into_inner(),
            item,
        }),
    ))
}

/// DELETE /media/{id} - blocking delete: blob first, then the record.
///
/// An already-absent blob does not fail the request; an absent record is a
/// plain 404.
async fn remove(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let row = documents::get_document(state.pool(), collections::MEDIA, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("media/{id}")))?;

    let item: MediaItem = serde_json::from_value(row.data).map_err(|e| {
        AppError::Database(RepositoryError::DataCorruption(format!("media/{id}: {e}")))
    })?;

    state.media().delete(&item.storage_path).await?;

    match documents::delete_document(state.pool(), collections::MEDIA, &id).await {
        Ok(()) | Err(RepositoryError::NotFound(_)) => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err(AppError::Database(err)),
    }
}

//! Contact-submission review.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::json;

use noor_core::{ContactSubmission, DocId, collections};

use crate::db::{detach_update, documents};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::crud::{self, Keyed, WriteAccepted};
use crate::state::AppState;

/// Build the submissions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(list))
        .route("/submissions/{id}/read", post(mark_read))
}

/// GET /submissions - every contact submission, newest first.
async fn list(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Keyed<ContactSubmission>>>> {
    Ok(Json(
        crud::list_typed(state.pool(), collections::CONTACT_SUBMISSIONS).await?,
    ))
}

/// POST /submissions/{id}/read - mark a submission read, fire-and-forget.
///
/// A merge-update touching only `isRead`; the rest of the submission is
/// left as stored. The detached write is an upsert, so an unknown or stale
/// id is rejected here first rather than minted as a phantom submission.
async fn mark_read(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<WriteAccepted>)> {
    if !documents::document_exists(state.pool(), collections::CONTACT_SUBMISSIONS, &id).await? {
        return Err(AppError::NotFound(format!(
            "{}/{id}",
            collections::CONTACT_SUBMISSIONS
        )));
    }

    let accepted = WriteAccepted { id: id.clone() };

    detach_update(
        state.pool().clone(),
        state.relay().clone(),
        collections::CONTACT_SUBMISSIONS,
        DocId::from_key(id),
        json!({ "isRead": true }),
    );

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

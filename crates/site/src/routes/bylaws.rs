//! Bylaws page and the document summarizer endpoint.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::pages::{LanguageQuery, resolve_page};
use crate::db::catalog;
use crate::error::{AppError, Result};
use crate::state::AppState;
use noor_core::Language;

/// GET /bylaws - page content plus the organizational documents.
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<serde_json::Value>> {
    let page = resolve_page(&state, "bylaws", query.lang).await?;
    let documents = catalog::list_org_documents(state.pool()).await?;

    Ok(Json(serde_json::json!({
        "page": page,
        "documents": documents,
    })))
}

/// Summarize request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub document_text: String,
    #[serde(default)]
    pub language: Language,
}

/// Summarize response body.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Longest document text accepted for summarization, in bytes.
const MAX_DOCUMENT_TEXT: usize = 200_000;

/// POST /bylaws/summarize - proxy a document to the summarizer service.
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    if request.document_text.trim().is_empty() {
        return Err(AppError::BadRequest("documentText is required".to_string()));
    }
    if request.document_text.len() > MAX_DOCUMENT_TEXT {
        return Err(AppError::BadRequest("documentText is too large".to_string()));
    }

    let Some(summarizer) = state.summarizer() else {
        return Err(AppError::Unavailable(
            "summarizer is not configured".to_string(),
        ));
    };

    let summary = summarizer
        .summarize(&request.document_text, request.language)
        .await?;

    Ok(Json(SummarizeResponse { summary }))
}

//! Programs listing.

use axum::Json;
use axum::extract::{Query, State};

use super::pages::{LanguageQuery, resolve_page};
use crate::db::catalog;
use crate::error::Result;
use crate::state::AppState;

/// GET /programs - page content plus all programs.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<serde_json::Value>> {
    let page = resolve_page(&state, "programs", query.lang).await?;
    let programs = catalog::list_programs(state.pool()).await?;

    Ok(Json(serde_json::json!({
        "page": page,
        "programs": programs,
    })))
}

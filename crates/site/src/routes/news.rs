//! News listing and post detail.

use axum::Json;
use axum::extract::{Path, Query, State};

use super::pages::{LanguageQuery, resolve_page};
use crate::db::catalog;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// GET /news - page content plus all posts.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<serde_json::Value>> {
    let page = resolve_page(&state, "news", query.lang).await?;
    let posts = catalog::list_posts(state.pool()).await?;

    Ok(Json(serde_json::json!({
        "page": page,
        "posts": posts,
    })))
}

/// GET /news/{slug} - a single post.
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let post = catalog::post_by_slug(state.pool(), &slug)
        .await
        .map_err(|err| match err {
            crate::db::RepositoryError::NotFound(_) => {
                AppError::NotFound(format!("news/{slug}"))
            }
            other => AppError::Database(other),
        })?;

    Ok(Json(serde_json::json!({ "post": post })))
}

//! Dashboard: counts of every managed collection.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use noor_core::collections;

use crate::db::documents::count_documents;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Collection counts shown on the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub programs: i64,
    pub posts: i64,
    pub board_members: i64,
    pub documents: i64,
    pub donations: i64,
    pub contact_submissions: i64,
    pub media: i64,
}

/// GET /dashboard
async fn dashboard(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<DashboardCounts>> {
    let pool = state.pool();

    Ok(Json(DashboardCounts {
        programs: count_documents(pool, collections::PROGRAMS).await?,
        posts: count_documents(pool, collections::POSTS).await?,
        board_members: count_documents(pool, collections::BOARD_MEMBERS).await?,
        documents: count_documents(pool, collections::DOCUMENTS).await?,
        donations: count_documents(pool, collections::DONATIONS).await?,
        contact_submissions: count_documents(pool, collections::CONTACT_SUBMISSIONS).await?,
        media: count_documents(pool, collections::MEDIA).await?,
    }))
}

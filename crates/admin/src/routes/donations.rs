//! Donation review (read-only).

use axum::{Json, Router, extract::State, routing::get};

use noor_core::{Donation, collections};

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::routes::crud::{self, Keyed};
use crate::state::AppState;

/// Build the donations router.
pub fn router() -> Router<AppState> {
    Router::new().route("/donations", get(list))
}

/// GET /donations - every donation, newest first.
async fn list(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Keyed<Donation>>>> {
    Ok(Json(
        crud::list_typed(state.pool(), collections::DONATIONS).await?,
    ))
}

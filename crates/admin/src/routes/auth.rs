//! Authentication route handlers for the admin panel.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use noor_core::{LoginDecision, login_gate};

use crate::db::roles;
use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{OptionalIdentity, clear_current_identity, set_current_identity};
use crate::models::CurrentIdentity;
use crate::services::auth;
use crate::state::AppState;

/// Build the auth router.
///
/// GET `/auth/login` answers with the mirror-gate state so the guard's
/// signed-out redirect lands on a real route, not a 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(session_state).post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session_state))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub identity: CurrentIdentity,
    /// Where the login page should go next (the mirror gate).
    pub decision: LoginDecision,
}

/// POST /auth/login - verify credentials and establish a session.
///
/// Logging in succeeds for any valid identity, admin or not; the guard
/// decides panel access separately on every request.
#[instrument(skip(state, session, request), fields(email = %request.email))]
async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let identity = auth::login(state.pool(), &request.email, &request.password).await?;

    set_current_identity(&session, &identity)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    set_sentry_user(&identity.uid, Some(&identity.email));

    let is_admin = roles::is_admin(state.pool(), &identity.uid)
        .await
        .unwrap_or(false);

    tracing::info!(uid = %identity.uid, is_admin, "admin login");

    Ok(Json(LoginResponse {
        decision: login_gate(true, is_admin, false),
        identity,
    }))
}

/// POST /auth/logout - clear the session.
async fn logout(session: Session) -> StatusCode {
    let _ = clear_current_identity(&session).await;
    clear_sentry_user();
    StatusCode::NO_CONTENT
}

/// Session state response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub identity: Option<CurrentIdentity>,
    pub is_admin: bool,
    /// What the login page should render for this session.
    pub decision: LoginDecision,
}

/// GET /auth/session - the login mirror-gate decision.
///
/// An authenticated admin is told to move forward to the dashboard;
/// everyone else is shown the form. Never a redirect away from login.
async fn session_state(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Json<SessionState> {
    let is_admin = match &identity {
        Some(current) => roles::is_admin(state.pool(), &current.uid)
            .await
            .unwrap_or(false),
        None => false,
    };

    Json(SessionState {
        decision: login_gate(identity.is_some(), is_admin, false),
        identity,
        is_admin,
    })
}

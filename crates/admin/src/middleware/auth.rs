//! Authentication middleware and extractors for the admin panel.
//!
//! [`RequireAdmin`] runs the route-guard state machine on every request:
//! session identity in, fresh role lookup, exactly one decision out. The
//! role lookup is never cached across requests and any lookup failure
//! counts as "not admin", so the guard fails closed.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use noor_core::{GateDecision, admin_gate};

use crate::db::roles;
use crate::models::{CurrentIdentity, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated admin.
///
/// An unauthenticated request is redirected to the login page (401 for
/// `/api/` paths); an authenticated non-admin gets a 403 access-denied
/// response and is never redirected anywhere.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(identity): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", identity.email)
/// }
/// ```
pub struct RequireAdmin(pub CurrentIdentity);

/// Error returned when the admin guard denies a request.
pub enum AdminGuardRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// Authenticated but not an admin. Terminal: no redirect.
    AccessDenied,
}

impl IntoResponse for AdminGuardRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::AccessDenied => (
                StatusCode::FORBIDDEN,
                "Access denied: this account does not have administrative privileges",
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminGuardRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminGuardRejection::Unauthorized)?;

        let identity: Option<CurrentIdentity> = session
            .get(session_keys::CURRENT_IDENTITY)
            .await
            .ok()
            .flatten();

        // Fresh role lookup per request. A failed lookup is not-admin.
        let is_admin = match &identity {
            Some(current) => roles::is_admin(state.pool(), &current.uid)
                .await
                .unwrap_or_else(|err| {
                    tracing::error!(uid = %current.uid, error = %err, "role lookup failed");
                    false
                }),
            None => false,
        };

        // The request is fully settled by this point, so is_loading is false.
        match admin_gate(identity.is_some(), is_admin, false) {
            GateDecision::Authorized => {
                // identity.is_some() held for this branch to be reachable.
                identity.map(Self).ok_or(AdminGuardRejection::Unauthorized)
            }
            GateDecision::RedirectToLogin | GateDecision::Loading => {
                if parts.uri.path().starts_with("/api/") {
                    Err(AdminGuardRejection::Unauthorized)
                } else {
                    Err(AdminGuardRejection::RedirectToLogin)
                }
            }
            GateDecision::AccessDenied => Err(AdminGuardRejection::AccessDenied),
        }
    }
}

/// Extractor that optionally gets the current identity.
///
/// Unlike `RequireAdmin`, this does not reject the request and does not
/// resolve the admin role.
pub struct OptionalIdentity(pub Option<CurrentIdentity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentIdentity>(session_keys::CURRENT_IDENTITY)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(identity))
    }
}

/// Helper to set the current identity in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_identity(
    session: &Session,
    identity: &CurrentIdentity,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_IDENTITY, identity)
        .await
}

/// Helper to clear the current identity from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_identity(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentIdentity>(session_keys::CURRENT_IDENTITY)
        .await?;
    Ok(())
}

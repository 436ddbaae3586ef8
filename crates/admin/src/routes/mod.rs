//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /auth/login             - Login mirror-gate decision (redirect target)
//! POST /auth/login             - Email/password login
//! POST /auth/logout            - Clear session
//! GET  /auth/session           - Login mirror-gate decision
//!
//! GET  /dashboard              - Collection counts
//!
//! GET  /pages                  - Page keys with override status
//! GET  /pages/{key}            - One content document (or the static template)
//! PUT  /pages/{key}            - Save content (fire-and-forget)
//! POST /pages/{key}/seed       - Seed a content document from the static template
//!
//! CRUD /programs, /news, /board-members, /documents
//!      GET list, POST create (202), PUT {id} (202), DELETE {id} (blocking)
//!
//! GET  /donations              - Donation list
//! GET  /submissions            - Contact submissions
//! POST /submissions/{id}/read  - Mark a submission read (fire-and-forget)
//!
//! GET  /media                  - Media records
//! POST /media                  - Multipart upload (blob + record)
//! DELETE /media/{id}           - Blocking, idempotent blob delete
//!
//! GET  /api/events             - SSE stream of relayed permission errors
//! ```
//!
//! Everything except `/auth/*` requires the admin guard.

use axum::Router;

use crate::state::AppState;

pub mod api;
pub mod auth;
pub mod board_members;
pub mod crud;
pub mod dashboard;
pub mod documents;
pub mod donations;
pub mod media;
pub mod news;
pub mod pages;
pub mod programs;
pub mod submissions;

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(pages::router())
        .merge(programs::router())
        .merge(news::router())
        .merge(board_members::router())
        .merge(documents::router())
        .merge(donations::router())
        .merge(submissions::router())
        .merge(media::router())
        .merge(api::events::router())
}

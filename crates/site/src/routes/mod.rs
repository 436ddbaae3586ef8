//! HTTP route handlers for the public site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page content
//! GET  /about                  - About page content
//! GET  /governance             - Governance page content + board members
//! GET  /membership             - Membership page content
//! GET  /donate                 - Donate page content
//! POST /donate                 - Submit a donation (fire-and-forget)
//!
//! GET  /programs               - Programs page content + program list
//! GET  /news                   - News page content + post list
//! GET  /news/{slug}            - Single post
//!
//! GET  /bylaws                 - Bylaws page content + org documents
//! POST /bylaws/summarize       - Summarize a document via the AI service
//!
//! POST /contact                - Submit a contact message (fire-and-forget)
//! GET  /media/...              - Uploaded media (static files)
//! ```
//!
//! Every content route takes `?lang=en|ar` and resolves its field map from
//! the static fallback overlaid by the remote content document.

use axum::Router;
use axum::routing::{get, post};

use crate::middleware::form_rate_limiter;
use crate::state::AppState;

pub mod bylaws;
pub mod contact;
pub mod donate;
pub mod news;
pub mod pages;
pub mod programs;

/// Build the public site router.
pub fn routes() -> Router<AppState> {
    let forms = Router::new()
        .route("/contact", post(contact::submit))
        .route("/donate", post(donate::submit))
        .route("/bylaws/summarize", post(bylaws::summarize))
        .layer(form_rate_limiter());

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/governance", get(pages::governance))
        .route("/membership", get(pages::membership))
        .route("/donate", get(pages::donate))
        .route("/programs", get(programs::list))
        .route("/news", get(news::list))
        .route("/news/{slug}", get(news::detail))
        .route("/bylaws", get(bylaws::page))
        .merge(forms)
}

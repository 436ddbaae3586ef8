//! HTTP middleware stack for the admin panel.

pub mod auth;
pub mod session;

pub use auth::{OptionalIdentity, RequireAdmin, clear_current_identity, set_current_identity};
pub use session::create_session_layer;

//! Admin-panel model types.

pub mod session;

pub use session::{CurrentIdentity, session_keys};

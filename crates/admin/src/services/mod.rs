//! Admin services.

pub mod auth;
pub mod media;

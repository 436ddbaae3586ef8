//! Core types for the Noor Foundation backend.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;

pub use id::{DocId, Uid, UidError};

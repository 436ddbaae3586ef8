//! Noor Core - Shared types library.
//!
//! This crate provides common types used across all Noor Foundation components:
//! - `site` - Public bilingual content API
//! - `admin` - Content-management panel (session-authenticated)
//! - `cli` - Command-line tools for migrations, roles, and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for uids and document ids
//! - [`language`] - The `en`/`ar` display-language pair
//! - [`content`] - Bilingual content documents, static fallbacks, and the
//!   overlay resolver
//! - [`guard`] - The admin-gate state machine
//! - [`permission`] - Permission-error values carried on the relay
//! - [`models`] - Typed payloads for the document collections
//! - [`collections`] - Collection names and blob path layout

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collections;
pub mod content;
pub mod guard;
pub mod language;
pub mod models;
pub mod permission;
pub mod types;

pub use content::{ContentDocument, resolve_fields, static_fallback};
pub use guard::{GateDecision, LoginDecision, admin_gate, login_gate};
pub use language::Language;
pub use models::{
    AdminRole, BilingualText, BoardMember, ContactSubmission, Donation, DonationFrequency,
    Identity, MediaItem, OrgDocument, Post, Program,
};
pub use permission::{PermissionError, StoreOperation};
pub use types::*;

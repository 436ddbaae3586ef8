//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use noor_core::Uid;

/// Session-stored identity.
///
/// Minimal data stored in the session to identify the signed-in user.
/// Deliberately carries no role: admin privilege is re-resolved from the
/// role collection on every request, so revoking a role takes effect
/// without touching sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentIdentity {
    /// The auth-layer uid, also the key of the user's role marker.
    pub uid: Uid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// Session keys for admin authentication data.
pub mod session_keys {
    /// Key for storing the current signed-in identity.
    pub const CURRENT_IDENTITY: &str = "current_identity";
}

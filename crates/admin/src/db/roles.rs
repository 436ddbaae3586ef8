//! Admin-role marker lookups.
//!
//! Privilege is the existence of `roles_admin/{uid}`, nothing else. The
//! record is created and removed only by the CLI; this module never writes.

use noor_core::{Uid, collections};
use sqlx::PgPool;

use super::{RepositoryError, documents};

/// Whether the uid carries the admin-role marker.
///
/// # Errors
///
/// Returns `RepositoryError::Database` on query failure. Callers treat any
/// error as "not admin" so the check fails closed.
pub async fn is_admin(pool: &PgPool, uid: &Uid) -> Result<bool, RepositoryError> {
    documents::document_exists(pool, collections::ROLES_ADMIN, uid.as_str()).await
}

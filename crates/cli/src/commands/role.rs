//! Admin-role management.
//!
//! Admin status is the existence of a `roles_admin/{uid}` document; the
//! payload records who granted it. These commands are the only writers of
//! that collection.

use noor_core::{AdminRole, Uid, collections};

use super::{CommandError, connect};

/// Grant the admin role to a uid (idempotent).
///
/// # Errors
///
/// Returns `CommandError` if the uid is malformed or the write fails.
pub async fn grant(uid: &str, granted_by: Option<&str>) -> Result<(), CommandError> {
    let uid = Uid::parse(uid).map_err(|e| CommandError::InvalidInput(e.to_string()))?;
    let pool = connect().await?;

    let role = AdminRole {
        granted_by: granted_by.map(ToOwned::to_owned),
    };
    let data =
        serde_json::to_value(&role).map_err(|e| CommandError::InvalidInput(e.to_string()))?;

    sqlx::query(
        r"
        INSERT INTO document (collection, id, data, created_at, updated_at)
        VALUES ($1, $2, $3, now(), now())
        ON CONFLICT (collection, id)
        DO UPDATE SET data = EXCLUDED.data, updated_at = now()
        ",
    )
    .bind(collections::ROLES_ADMIN)
    .bind(uid.as_str())
    .bind(data)
    .execute(&pool)
    .await?;

    tracing::info!("Granted admin role to {uid}");
    Ok(())
}

/// Revoke the admin role from a uid.
///
/// # Errors
///
/// Returns `CommandError` if the uid carries no role or the delete fails.
pub async fn revoke(uid: &str) -> Result<(), CommandError> {
    let uid = Uid::parse(uid).map_err(|e| CommandError::InvalidInput(e.to_string()))?;
    let pool = connect().await?;

    let result = sqlx::query("DELETE FROM document WHERE collection = $1 AND id = $2")
        .bind(collections::ROLES_ADMIN)
        .bind(uid.as_str())
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CommandError::InvalidInput(format!(
            "{uid} does not carry the admin role"
        )));
    }

    tracing::info!("Revoked admin role from {uid}");
    Ok(())
}

/// List every uid carrying the admin role.
///
/// # Errors
///
/// Returns `CommandError` if the query fails.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), CommandError> {
    let pool = connect().await?;

    let rows: Vec<(String, serde_json::Value)> =
        sqlx::query_as("SELECT id, data FROM document WHERE collection = $1 ORDER BY id")
            .bind(collections::ROLES_ADMIN)
            .fetch_all(&pool)
            .await?;

    if rows.is_empty() {
        println!("No admin roles granted.");
        return Ok(());
    }

    for (uid, data) in rows {
        let role: AdminRole = serde_json::from_value(data).unwrap_or_default();
        match role.granted_by {
            Some(granted_by) => println!("{uid}  (granted by {granted_by})"),
            None => println!("{uid}"),
        }
    }
    Ok(())
}

//! Database migration command.
//!
//! Runs the shared-schema migrations from `crates/admin/migrations/` plus
//! the tower-sessions store migration, against the single database both
//! binaries use.

use tower_sessions_sqlx_store::PostgresStore;

use super::{CommandError, connect};

/// Run all migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or a migration
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running schema migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Running session store migration...");
    let store = PostgresStore::new(pool.clone());
    store
        .migrate()
        .await
        .map_err(CommandError::Database)?;

    tracing::info!("Migrations complete!");
    Ok(())
}

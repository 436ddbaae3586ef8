//! Login-identity management.
//!
//! Creates rows in the `identity` table with Argon2id-hashed passwords.
//! Creating an identity does NOT grant the admin role; see `role grant`.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use noor_core::Uid;

use super::{CommandError, connect};

/// Create a login identity and print its uid.
///
/// # Errors
///
/// Returns `CommandError` if the email is taken, the hash fails, or the
/// insert fails.
#[allow(clippy::print_stdout)]
pub async fn create(email: &str, name: &str, password: &str) -> Result<(), CommandError> {
    if !email.contains('@') {
        return Err(CommandError::InvalidInput(format!(
            "'{email}' is not an email address"
        )));
    }
    if password.len() < 12 {
        return Err(CommandError::InvalidInput(
            "password must be at least 12 characters".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CommandError::InvalidInput(format!("password hash failed: {e}")))?
        .to_string();

    let pool = connect().await?;
    let uid = Uid::generate();

    sqlx::query(
        r"
        INSERT INTO identity (uid, email, display_name, password_hash, created_at)
        VALUES ($1, $2, $3, $4, now())
        ",
    )
    .bind(uid.as_str())
    .bind(email)
    .bind(name)
    .bind(&password_hash)
    .execute(&pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            CommandError::InvalidInput(format!("an identity for {email} already exists"))
        }
        _ => CommandError::Database(e),
    })?;

    tracing::info!("Created identity for {email}");
    println!("{}", uid.as_str());
    Ok(())
}

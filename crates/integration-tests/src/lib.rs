//! Integration tests for the Noor Foundation site and admin panel.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! noor-cli migrate && noor-cli seed
//!
//! # Start both servers
//! cargo run -p noor-site &
//! cargo run -p noor-admin &
//!
//! # Run the ignored integration tests
//! cargo test -p noor-integration-tests -- --ignored
//! ```
//!
//! The admin tests expect an identity with the admin role, configured via
//! `NOOR_TEST_ADMIN_EMAIL` / `NOOR_TEST_ADMIN_PASSWORD`, and optionally a
//! second identity without the role via `NOOR_TEST_MEMBER_EMAIL` /
//! `NOOR_TEST_MEMBER_PASSWORD` for the access-denied tests.

use reqwest::Client;
use serde_json::json;

/// Base URL for the public site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// A cookie-carrying client that does not follow redirects, so guard
/// decisions stay observable.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in against the admin panel, leaving the session cookie on `client`.
///
/// # Panics
///
/// Panics if the request fails or the credentials are rejected.
pub async fn login(client: &Client, email: &str, password: &str) {
    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(
        resp.status().is_success(),
        "login as {email} failed with {}",
        resp.status()
    );
}

/// Credentials for the admin test identity, from environment.
#[must_use]
pub fn admin_credentials() -> (String, String) {
    (
        std::env::var("NOOR_TEST_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@noor-foundation.test".to_string()),
        std::env::var("NOOR_TEST_ADMIN_PASSWORD").unwrap_or_else(|_| "test-admin-password".to_string()),
    )
}

/// Credentials for a logged-in identity WITHOUT the admin role.
#[must_use]
pub fn member_credentials() -> (String, String) {
    (
        std::env::var("NOOR_TEST_MEMBER_EMAIL")
            .unwrap_or_else(|_| "member@noor-foundation.test".to_string()),
        std::env::var("NOOR_TEST_MEMBER_PASSWORD")
            .unwrap_or_else(|_| "test-member-password".to_string()),
    )
}

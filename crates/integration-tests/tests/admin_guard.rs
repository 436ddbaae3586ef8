//! Integration tests for the admin route guard.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p noor-admin)
//! - Test identities created via `noor-cli identity create`, with the admin
//!   role granted to one of them via `noor-cli role grant`
//!
//! Run with: cargo test -p noor-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use noor_integration_tests::{admin_base_url, admin_credentials, client, login, member_credentials};

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unauthenticated_request_redirects_to_login() {
    let client = client();
    let resp = client
        .get(format!("{}/dashboard", admin_base_url()))
        .send()
        .await
        .expect("Failed to get dashboard");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("redirect without location header");
    assert_eq!(location, "/auth/login");

    // The redirect target must itself answer GET, with the mirror-gate
    // decision for a signed-out visitor.
    let resp = client
        .get(format!("{}{location}", admin_base_url()))
        .send()
        .await
        .expect("Failed to follow redirect to login");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse login state");
    assert_eq!(body["decision"], "show_login");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_unauthenticated_api_request_is_401_not_redirect() {
    let client = client();
    let resp = client
        .get(format!("{}/api/events", admin_base_url()))
        .send()
        .await
        .expect("Failed to get event stream");

    // API consumers get a status code, not a login page.
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get("location").is_none());
}

#[tokio::test]
#[ignore = "Requires running admin server and a non-admin test identity"]
async fn test_logged_in_non_admin_gets_403_and_is_never_redirected() {
    let client = client();
    let (email, password) = member_credentials();
    login(&client, &email, &password).await;

    let resp = client
        .get(format!("{}/dashboard", admin_base_url()))
        .send()
        .await
        .expect("Failed to get dashboard");

    // Access denied is a terminal answer: no redirect loop back to login.
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(resp.headers().get("location").is_none());
}

#[tokio::test]
#[ignore = "Requires running admin server and an admin test identity"]
async fn test_admin_is_authorized() {
    let client = client();
    let (email, password) = admin_credentials();
    login(&client, &email, &password).await;

    let resp = client
        .get(format!("{}/dashboard", admin_base_url()))
        .send()
        .await
        .expect("Failed to get dashboard");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse dashboard");
    assert!(body.get("programs").is_some());
}

#[tokio::test]
#[ignore = "Requires running admin server and an admin test identity"]
async fn test_login_mirror_gate() {
    let client = client();
    let base_url = admin_base_url();

    // Signed out: the login page should show the form.
    let resp = client
        .get(format!("{base_url}/auth/session"))
        .send()
        .await
        .expect("Failed to get session state");
    let body: Value = resp.json().await.expect("Failed to parse session state");
    assert_eq!(body["decision"], "show_login");
    assert!(body["identity"].is_null());

    // Signed in as admin: the login page should bounce to the dashboard.
    let (email, password) = admin_credentials();
    login(&client, &email, &password).await;

    let resp = client
        .get(format!("{base_url}/auth/session"))
        .send()
        .await
        .expect("Failed to get session state");
    let body: Value = resp.json().await.expect("Failed to parse session state");
    assert_eq!(body["decision"], "redirect_to_dashboard");
    assert_eq!(body["isAdmin"], true);

    // Signed out again: back to the form.
    let resp = client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}/auth/session"))
        .send()
        .await
        .expect("Failed to get session state");
    let body: Value = resp.json().await.expect("Failed to parse session state");
    assert_eq!(body["decision"], "show_login");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_bad_credentials_are_rejected() {
    let client = client();
    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&serde_json::json!({
            "email": "nobody@noor-foundation.test",
            "password": "definitely-wrong"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

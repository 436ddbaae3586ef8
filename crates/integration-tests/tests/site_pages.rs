//! Integration tests for the public site's bilingual pages.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site server running (cargo run -p noor-site)
//!
//! Run with: cargo test -p noor-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use noor_integration_tests::{client, site_base_url};

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_home_page_defaults_to_english() {
    let client = client();
    let resp = client
        .get(format!("{}/", site_base_url()))
        .send()
        .await
        .expect("Failed to get home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse home page");

    assert_eq!(body["language"], "en");
    assert_eq!(body["direction"], "ltr");
    assert_eq!(body["pageKey"], "home");
    // The fallback table guarantees fields even with an empty database.
    assert!(body["fields"].as_object().is_some_and(|f| !f.is_empty()));
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_arabic_pages_render_rtl() {
    let client = client();

    for page in ["", "about", "membership", "donate", "governance"] {
        let resp = client
            .get(format!("{}/{page}?lang=ar", site_base_url()))
            .send()
            .await
            .expect("Failed to get page");

        assert_eq!(resp.status(), StatusCode::OK, "page: /{page}");
        let body: Value = resp.json().await.expect("Failed to parse page");
        assert_eq!(body["language"], "ar", "page: /{page}");
        assert_eq!(body["direction"], "rtl", "page: /{page}");
    }
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_unknown_language_is_rejected() {
    let client = client();
    let resp = client
        .get(format!("{}/?lang=fr", site_base_url()))
        .send()
        .await
        .expect("Failed to get home page");

    // Only en and ar deserialize; anything else is a bad query string.
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_missing_news_post_is_404() {
    let client = client();
    let resp = client
        .get(format!(
            "{}/news/this-slug-does-not-exist",
            site_base_url()
        ))
        .send()
        .await
        .expect("Failed to get news post");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = site_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}

//! Integration tests for the admin media library.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p noor-admin)
//! - An admin test identity (see `noor-cli identity create` / `role grant`)
//!
//! Run with: cargo test -p noor-integration-tests -- --ignored

use reqwest::{StatusCode, multipart};
use serde_json::Value;

use noor_integration_tests::{admin_base_url, admin_credentials, client, login};

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

async fn upload_fixture(client: &reqwest::Client) -> Value {
    let part = multipart::Part::bytes(PNG_HEADER.to_vec())
        .file_name("fixture.png")
        .mime_str("image/png")
        .expect("Failed to build multipart part");
    let form = multipart::Form::new().part("file", part);

    let resp = client
        .post(format!("{}/media", admin_base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload media");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse upload response")
}

#[tokio::test]
#[ignore = "Requires running admin server and an admin test identity"]
async fn test_upload_and_serve() {
    let admin = client();
    let (email, password) = admin_credentials();
    login(&admin, &email, &password).await;

    let uploaded = upload_fixture(&admin).await;
    assert_eq!(uploaded["fileName"], "fixture.png");
    assert_eq!(uploaded["contentType"], "image/png");
    assert!(uploaded["imageUrl"].as_str().is_some_and(|u| !u.is_empty()));

    // The record shows up in the library listing.
    let resp = admin
        .get(format!("{}/media", admin_base_url()))
        .send()
        .await
        .expect("Failed to list media");
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Value> = resp.json().await.expect("Failed to parse media list");
    assert!(items.iter().any(|i| i["id"] == uploaded["id"]));
}

#[tokio::test]
#[ignore = "Requires running admin server and an admin test identity"]
async fn test_delete_tolerates_missing_blob() {
    let admin = client();
    let (email, password) = admin_credentials();
    login(&admin, &email, &password).await;

    let uploaded = upload_fixture(&admin).await;
    let id = uploaded["id"].as_str().expect("missing id");

    // First delete removes blob and record.
    let resp = admin
        .delete(format!("{}/media/{id}", admin_base_url()))
        .send()
        .await
        .expect("Failed to delete media");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Deleting again: the record is gone, so this is a plain 404, not a
    // blob-storage error.
    let resp = admin
        .delete(format!("{}/media/{id}", admin_base_url()))
        .send()
        .await
        .expect("Failed to delete media twice");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server and an admin test identity"]
async fn test_empty_upload_is_rejected() {
    let admin = client();
    let (email, password) = admin_credentials();
    login(&admin, &email, &password).await;

    let part = multipart::Part::bytes(Vec::new())
        .file_name("empty.png")
        .mime_str("image/png")
        .expect("Failed to build multipart part");
    let form = multipart::Form::new().part("file", part);

    let resp = admin
        .post(format!("{}/media", admin_base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload media");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

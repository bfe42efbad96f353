//! tests/error_responses/constraint.rs
//! Ensures storage constraint violations map to 400, with the storage
//! detail surfaced only outside production.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

async fn trigger_constraint(base_url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("{}/constraint", base_url))
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn surfaces_storage_detail_outside_production() {
    let base_url: String = common::spawn_app(false);

    let resp: reqwest::Response = trigger_constraint(&base_url).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Database constraint violation");
    assert_eq!(json["hint"], "Key (name)=(demo) already exists.");
}

#[tokio::test]
async fn masks_storage_detail_in_production() {
    let base_url: String = common::spawn_app(true);

    let resp: reqwest::Response = trigger_constraint(&base_url).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();

    assert_eq!(json["error"], "Database constraint violation");
    assert_eq!(json["hint"], "Invalid data provided");
}

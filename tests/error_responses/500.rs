//! tests/error_responses/500.rs
//! Ensures unclassified handler failures map to 500, with the raw message
//! surfaced only outside production.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

async fn trigger_failure(base_url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("{}/failure", base_url))
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
async fn surfaces_raw_message_outside_production() {
    let base_url: String = common::spawn_app(false);

    let resp: reqwest::Response = trigger_failure(&base_url).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "simulated downstream failure");
    assert_eq!(json["hint"], "Please try again later");
}

#[tokio::test]
async fn masks_message_in_production() {
    let base_url: String = common::spawn_app(true);

    let resp: reqwest::Response = trigger_failure(&base_url).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();

    assert_eq!(json["error"], "Internal server error");
    assert_eq!(json["hint"], "Please try again later");
}

//! tests/error_responses/413.rs
//! Ensures that sending a payload above the body limit (2MB by default)
//! yields a translated 413, not a parse failure.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app(false);

    // Generate a payload slightly larger than 2MB.
    let oversized_payload: Vec<u8> = vec![b'X'; 2_097_152 + 100];

    let client: reqwest::Client = reqwest::Client::new();
    let resp: reqwest::Response = client
        .post(format!("{}/echo", base_url))
        .header("content-type", "application/json")
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Request body too large");
}

//! tests/error_responses/408.rs
//! Ensures that requests taking too long result in a translated 408.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let base_url: String = common::spawn_app(false);

    // The /timeout handler sleeps past the configured timeout, so the
    // timeout layer cancels the request and the boundary funnel maps the
    // failure into the error pipeline.
    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> =
        timeout(
            Duration::from_secs(5), // client-side timeout duration
            async {
                reqwest::Client::new()
                    .get(format!("{}/timeout", base_url))
                    .send()
                    .await
            },
        )
        .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Request timed out");
}

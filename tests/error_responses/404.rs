//! tests/error_responses/404.rs
//! Ensures that hitting an unknown route returns HTTP 404 with the method
//! and path interpolated into the hint.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app(false);

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Endpoint not found");
    assert_eq!(
        json["hint"],
        "GET /does-not-exist does not exist. Check the API documentation."
    );
}

#[tokio::test]
async fn hint_reflects_the_request_method() {
    let base_url: String = common::spawn_app(false);

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/widgets/42", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(
        json["hint"],
        "DELETE /widgets/42 does not exist. Check the API documentation."
    );
}

// Demo handlers for error-pipeline validation

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::errors::{ApiError, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct WidgetInput {
    pub name: String,
}

/// Returns API status and deployment mode
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    info!("Status endpoint called");

    Json(json!({
        "success": true,
        "status": "healthy",
        "environment": state.environment.environment.as_ref()
    }))
}

/// Echoes the JSON body back; malformed bodies take the body-parse branch
pub async fn echo_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body): Json<Value> = payload?;

    Ok(Json(json!({ "success": true, "echo": body })))
}

/// Creates a widget; empty names raise an explicit 422 ApiError
pub async fn create_widget_handler(
    payload: Result<Json<WidgetInput>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(input): Json<WidgetInput> = payload?;

    if input.name.trim().is_empty() {
        return Err(
            ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation failed")
                .hint("The `name` field must not be empty")
                .into(),
        );
    }

    Ok(Json(json!({ "success": true, "widget": { "name": input.name } })))
}

/// Sleeps past the configured timeout to exercise the boundary funnel
#[instrument(skip(state))]
pub async fn timeout_test_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let timeout_seconds: u64 = state.environment.default_timeout_seconds;

    info!(
        "Testing timeout: sleeping for {} seconds (timeout is set to {} seconds)",
        timeout_seconds + 2,
        timeout_seconds
    );

    // Sleep beyond the configured timeout; the timeout layer cancels the
    // request before this completes.
    tokio::time::sleep(std::time::Duration::from_secs(timeout_seconds + 2)).await;

    Ok(Json(json!({ "success": true })))
}

/// Raises the error shape the storage layer produces for a unique violation
#[instrument]
pub async fn constraint_test_handler() -> AppResult<Json<Value>> {
    info!("Testing deliberate constraint violation");

    Err(AppError::Constraint {
        code: "23505".into(),
        detail: Some("Key (name)=(demo) already exists.".into()),
        message: "duplicate key value violates unique constraint \"widgets_name_key\"".into(),
    })
}

/// Fails after an await point to test the async boundary
#[instrument]
pub async fn failure_test_handler() -> AppResult<Json<Value>> {
    info!("Testing deliberate downstream failure");

    // Suspend first so the failure is genuinely asynchronous.
    tokio::task::yield_now().await;

    let result: anyhow::Result<()> = Err(anyhow::anyhow!("simulated downstream failure"));
    result?;

    Ok(Json(json!({ "success": true })))
}

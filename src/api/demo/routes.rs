// Demo route definitions

use axum::{
    routing::{get, post},
    Router,
};

use super::handler;
use crate::config::state::AppState;

/// Creates a router with endpoints exercising every branch of the error
/// pipeline, one per classification kind.
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handler::status_handler))
        // Rejects non-JSON bodies through the body-parse branch
        .route("/echo", post(handler::echo_handler))
        // Raises an explicit 422 ApiError on empty names
        .route("/widgets", post(handler::create_widget_handler))
        // Sleeps past the configured timeout to hit the boundary funnel
        .route("/timeout", get(handler::timeout_test_handler))
        // Surfaces a unique-violation through the constraint branch
        .route("/constraint", get(handler::constraint_test_handler))
        // Fails asynchronously through the fallback branch
        .route("/failure", get(handler::failure_test_handler))
}

// The single point where every handler failure becomes a client response

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::config::state::AppState;
use crate::errors::AppError;

/// Rewrites failed responses through the error translator.
///
/// Handlers return `AppResult<T>`; a failure surfaces as an `AppError`
/// stashed in the response extensions (see `AppError::into_response`).
/// Synchronous and asynchronous failures arrive through this one call site,
/// which holds the request context the translator logs with.
pub async fn error_translation(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    // Captured before the request is consumed by the inner service.
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let mut response: Response = next.run(req).await;

    match response.extensions_mut().remove::<AppError>() {
        Some(err) => state.translator.translate(&err, &method, &path),
        None => response,
    }
}

// Funnel for errors raised by infrastructure layers (timeout, body limit)

use axum::{http::StatusCode, BoxError};
use http_body_util::LengthLimitError;
use std::error::Error;
use tower::timeout::error::Elapsed;

use crate::errors::{ApiError, AppError};

/// Maps `BoxError` failures from tower layers into the application error
/// channel, so they reach the translator like any handler failure.
pub async fn handle_boundary_error(err: BoxError) -> AppError {
    // 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() {
        return ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into();
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return ApiError::new(StatusCode::REQUEST_TIMEOUT, "Request timed out").into();
    }

    AppError::unexpected(err.to_string())
}

/// Helper function to find a specific error type in the error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

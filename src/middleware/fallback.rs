// Terminal responder for requests that matched no route

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::models::response::ErrorBody;

/// Always 404. No classification and no diagnostic record; an unmatched
/// route is a client mistake, not a failure worth an error log.
pub async fn not_found_handler(method: Method, uri: Uri) -> Response {
    let body: ErrorBody = ErrorBody::new("Endpoint not found").hint(format!(
        "{} {} does not exist. Check the API documentation.",
        method,
        uri.path()
    ));

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

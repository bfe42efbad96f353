// Terminal error translator: one error in, one JSON response out

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::errors::app_error::AppError;
use crate::models::response::ErrorBody;

/// Translates classified errors into client-facing JSON responses.
///
/// The production flag is injected here, once, so message verbosity is a
/// property of the translator rather than something each branch reads from
/// the process environment. The translator itself never fails.
#[derive(Debug, Clone)]
pub struct ErrorTranslator {
    production: bool,
}

impl ErrorTranslator {
    pub fn new(production: bool) -> Self {
        Self { production }
    }

    /// Builds the response for `err`, logging one diagnostic record first.
    ///
    /// The log record always carries the raw message and trace detail, even
    /// in production where the client-facing body is generic. It is emitted
    /// exactly once per handled error, before the response goes out.
    pub fn translate(&self, err: &AppError, method: &Method, path: &str) -> Response {
        let status: StatusCode = err.status();

        error!(
            %method,
            %path,
            status = status.as_u16(),
            error = %err,
            trace = err.trace().unwrap_or_default(),
            "request failed"
        );

        let body: ErrorBody = match err {
            // Explicit API errors serialize themselves; pass the body
            // through verbatim in every mode.
            AppError::Api(api) => api.to_body(),

            // Fixed message and hint; the parser's own text never reaches
            // the client.
            AppError::BodyParse { .. } => ErrorBody::new("Invalid JSON body")
                .hint("Check your request body is valid JSON"),

            AppError::Constraint { detail, message, .. } => {
                let hint: String = if self.production {
                    "Invalid data provided".to_owned()
                } else {
                    detail.clone().unwrap_or_else(|| message.clone())
                };

                ErrorBody::new("Database constraint violation").hint(hint)
            }

            AppError::Unexpected { message, .. } => {
                let message: String = if self.production {
                    "Internal server error".to_owned()
                } else {
                    message.clone()
                };

                ErrorBody::new(message).hint("Please try again later")
            }
        };

        (status, Json(body)).into_response()
    }
}

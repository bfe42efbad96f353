// Explicit, application-raised errors that carry their own HTTP status

use std::fmt;

use axum::http::StatusCode;

use crate::models::response::ErrorBody;

/// An error a handler raises deliberately. It knows its own status code and
/// serializes itself; the translator emits its body verbatim in every
/// deployment mode.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub hint: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Self-serialization: the body the client receives, unchanged by the
    /// translator.
    pub fn to_body(&self) -> ErrorBody {
        let body: ErrorBody = ErrorBody::new(self.message.clone());

        match &self.hint {
            Some(hint) => body.hint(hint.clone()),
            None => body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// The application error taxonomy and its conversions from collaborator errors

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

use crate::errors::api_error::ApiError;
use crate::models::response::ErrorBody;

/// SQLSTATE class 23 covers integrity-constraint violations (unique, foreign
/// key, not-null) on the Postgres storage layer.
const CONSTRAINT_CODE_PREFIX: &str = "23";

/// Handler result type; any `Err` re-enters the error-translation layer.
pub type AppResult<T> = Result<T, AppError>;

/// Every failure this service can surface, classified once at construction
/// instead of by probing fields downstream.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Explicit API error with its own status and serialization.
    #[error("{0}")]
    Api(ApiError),

    /// The request body could not be parsed as JSON.
    #[error("invalid JSON body: {detail}")]
    BodyParse { detail: String },

    /// The storage layer rejected a write due to an integrity constraint.
    #[error("database constraint violation ({code}): {message}")]
    Constraint {
        code: String,
        detail: Option<String>,
        message: String,
    },

    /// Anything else. `status` is honored when present, otherwise 500.
    #[error("{message}")]
    Unexpected {
        status: Option<StatusCode>,
        message: String,
        trace: Option<String>,
    },
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            status: None,
            message: message.into(),
            trace: None,
        }
    }

    /// Resolved HTTP status for this error. Shared by every response path,
    /// so the placeholder response and the translated one always agree.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Api(api) => api.status,
            Self::BodyParse { .. } | Self::Constraint { .. } => StatusCode::BAD_REQUEST,
            Self::Unexpected { status, .. } => status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Source-chain detail captured at conversion time, for the diagnostic
    /// log record only. Never reaches the client.
    pub fn trace(&self) -> Option<&str> {
        match self {
            Self::BodyParse { detail } => Some(detail),
            Self::Constraint { detail, .. } => detail.as_deref(),
            Self::Unexpected { trace, .. } => trace.as_deref(),
            Self::Api(_) => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // An oversized body is refused by the limit layer before the parser
        // runs; keep its 413 instead of reporting a parse failure.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into();
        }

        Self::BodyParse {
            detail: rejection.body_text(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(code) = db_err.code() {
                if code.starts_with(CONSTRAINT_CODE_PREFIX) {
                    // Postgres carries the human-readable specifics (which
                    // key, which value) in the DETAIL field.
                    let detail: Option<String> = db_err
                        .try_downcast_ref::<PgDatabaseError>()
                        .and_then(|pg| pg.detail().map(str::to_owned));

                    return Self::Constraint {
                        code: code.into_owned(),
                        detail,
                        message: db_err.message().to_owned(),
                    };
                }
            }
        }

        Self::Unexpected {
            status: None,
            message: err.to_string(),
            trace: Some(format!("{err:?}")),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected {
            status: None,
            message: err.to_string(),
            // anyhow's Debug rendering includes the cause chain (and a
            // backtrace when RUST_BACKTRACE is set).
            trace: Some(format!("{err:?}")),
        }
    }
}

impl IntoResponse for AppError {
    /// Emits a neutral placeholder response and stashes the error in the
    /// response extensions. The error-translation middleware picks it up and
    /// rewrites status and body with full request context; the placeholder
    /// only ever reaches a client if that layer was not installed.
    fn into_response(self) -> Response {
        let status: StatusCode = self.status();
        let placeholder: ErrorBody =
            ErrorBody::new(status.canonical_reason().unwrap_or("Error"));

        let mut response: Response = (status, Json(placeholder)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

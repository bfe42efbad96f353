// Library root for the error-translation middleware service

pub mod api;
pub mod config;
pub mod core;
pub mod errors;
pub mod middleware;
pub mod models;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::errors::{ApiError, AppError, AppResult, ErrorTranslator};
pub use crate::models::response::ErrorBody;

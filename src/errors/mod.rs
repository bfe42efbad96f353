/*
    * Error taxonomy and translation: the application error type, the
    * explicit API error it wraps, and the translator that turns either
    * into a JSON response.
*/

pub mod api_error;
pub mod app_error;
pub mod translator;

pub use api_error::ApiError;
pub use app_error::{AppError, AppResult};
pub use translator::ErrorTranslator;

// Application state shared across request handlers

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::errors::ErrorTranslator;

/// Per-process state injected into the router.
///
/// The translator receives the production flag at construction time, so no
/// component downstream reads the deployment mode from ambient state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub translator: Arc<ErrorTranslator>,
}

impl AppState {
    /// Builds state from an already-loaded configuration (used by tests to
    /// pin the deployment mode).
    pub fn new(environment: EnvironmentVariables) -> Self {
        let translator: ErrorTranslator = ErrorTranslator::new(environment.is_production());

        Self {
            environment: Arc::new(environment),
            translator: Arc::new(translator),
        }
    }

    /// Builds state from the process-wide environment singleton.
    pub fn from_env() -> Self {
        Self::new(EnvironmentVariables::instance().clone())
    }
}

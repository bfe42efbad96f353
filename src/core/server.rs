// Application server configuration and setup

use std::time::Duration;

use anyhow::Result;
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    Router,
};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tower::{timeout::TimeoutLayer, ServiceBuilder};

use crate::api::demo::routes::demo_routes;
use crate::config::environment::EnvironmentVariables;
use crate::config::state::AppState;
use crate::middleware::{
    boundary::handle_boundary_error, error_translation::error_translation,
    fallback::not_found_handler,
};

/// Creates and configures the application router with all middleware layers.
///
/// The error-translation layer sits outermost so it sees failures from the
/// router, from the boundary funnel, and from every layer beneath it.
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;

    Router::new()
        .merge(demo_routes())
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn_with_state(state.clone(), error_translation))
                .layer(HandleErrorLayer::new(handle_boundary_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size)),
        )
        .with_state(state)
}

/// Sets up the TCP listener from the environment or binds a new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}

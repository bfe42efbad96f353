use axum::{serve, Router};
use tokio::net::TcpListener;

use error_translator::config::state::AppState;
use error_translator::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env();
    let app: Router = server::create_app(state.clone());

    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

//! HTTP surface of the bone age service.

mod config;
mod error;
mod handlers;
mod router;
mod state;

pub use config::ServerConfig;
pub use config::DEFAULT_MAX_UPLOAD_SIZE;
pub use error::ServerError;
pub use router::create_router;
pub use state::AppState;

use std::sync::Arc;

use anyhow::Context;
use boneage::inference::OnnxRegressor;
use tokio::net::TcpListener;

/// Load the model, bind and serve until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    log::info!("Loading model from {}", config.model_path.display());
    let model = OnnxRegressor::load(&config.model_path)?;

    let state = AppState::new(Arc::new(model));
    let app = create_router(state, &config);

    let address = config.bind_address();
    log::info!("Attempting to bind to {}", address);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    let local = listener.local_addr()?;
    log::info!("Successfully bound to http://{}", local);
    log::info!(
        "Max upload size: {} MiB",
        config.max_upload_size / 1024 / 1024
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::warn!("Ctrl-C received, stopping...");
}

use std::{sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;
use watchlist_api::{
    api::{create_router, AppState},
    config::Config,
    services::providers::HttpShowSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let source = HttpShowSource::new(
        &config.upstream_api_url,
        Duration::from_secs(config.upstream_timeout_secs),
    )?;

    let state = AppState::new(Arc::new(source)).with_cors_origins(config.cors_origin_list());
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        upstream = %config.upstream_api_url,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

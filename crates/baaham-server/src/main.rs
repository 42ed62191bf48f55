//! Baaham Server — application entry point.

use anyhow::Context;
use baaham_db::Database;
use baaham_server::{AppConfig, app, telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    telemetry::init(&config);
    config.validate_for_server()?;

    info!(
        env = %config.app_env,
        port = config.server.port,
        "Configuration loaded"
    );

    let db = Database::open(&config.database)
        .await
        .context("opening SurrealDB")?;

    let router = app::compose(db.into_client(), &config)?;

    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, "Starting Baaham server...");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Baaham server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

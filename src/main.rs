use std::time::Duration;

use clap::Parser;
use text_snippets::app::{AppState, build_router};
use text_snippets::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting text snippet service on {}", config.bind);

    // 1. Shared state:
    let state = AppState::new();

    // 2. HTTP Router:
    let app = build_router(&state);

    // 3. Spawn stats reporter:
    if config.stats_interval > Duration::ZERO {
        let stats_state = state.clone();
        let period = config.stats_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            loop {
                interval.tick().await;
                tracing::info!(
                    "Store stats: {} records, {} idempotency keys",
                    stats_state.store.len(),
                    stats_state.ledger.len()
                );
            }
        });
    }

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

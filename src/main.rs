use orderboard_api::{ApiConfig, ApiServer};
use orderboard_core::ServiceConfig;
use orderboard_feed::FeedEngine;
use orderboard_metrics::{MetricsConfig, MetricsServer};
use orderboard_store::DashboardStore;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("orderboard_feed=info".parse()?)
                .add_directive("orderboard_api=info".parse()?),
        )
        .init();

    info!("Orderboard starting...");

    // Load configuration (validates env vars)
    let config = match ServiceConfig::load() {
        Ok(config) => {
            info!(
                backend_url = %config.backend_url,
                refresh_interval_secs = config.refresh.interval_secs,
                "Configuration loaded"
            );
            config
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Create in-memory store
    let store = Arc::new(DashboardStore::new());

    // Create feed engine
    let feed = FeedEngine::new(&config, store.clone());

    // Setup shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    // Handle Ctrl+C
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received (Ctrl+C)");
        shutdown_tx_clone.send(()).ok();
    });

    // Start metrics server (if enabled)
    if std::env::var("METRICS_PORT").is_ok() || std::env::var("METRICS_ENABLED").is_ok() {
        let metrics_config = MetricsConfig::from_env();
        let metrics_server = MetricsServer::new(metrics_config);
        tokio::spawn(async move {
            if let Err(e) = metrics_server.run().await {
                error!(error = %e, "Metrics server error");
            }
        });
        info!("Metrics server started");
    }

    // Start GraphQL API server
    let api_config = ApiConfig::from_env();
    let api_server = ApiServer::new(api_config, store.clone());
    tokio::spawn(async move {
        if let Err(e) = api_server.run().await {
            error!(error = %e, "API server error");
        }
    });
    info!("GraphQL API server started");

    // Spawn status printer
    let store_clone = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(30));
        loop {
            interval.tick().await;
            let state = store_clone.refresh_state.read().await;

            info!(
                mode = ?state.mode,
                orders = store_clone.orders.count(),
                tables = store_clone.tables.count(),
                refreshes = state.stats.total_refreshes,
                failed = state.stats.failed_refreshes,
                "Status"
            );
        }
    });

    // Run the feed engine until shutdown
    if let Err(e) = feed.run(shutdown_rx).await {
        error!(error = %e, "Feed engine error");
        std::process::exit(1);
    }

    // Graceful shutdown
    info!("Orderboard shutdown complete");
    Ok(())
}

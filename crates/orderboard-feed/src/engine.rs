use crate::client::BackendClient;
use crate::Result;
use chrono::Utc;
use orderboard_core::{RefreshConfig, ServiceConfig};
use orderboard_stats::{classify_table, compute_serving_guests, compute_statics};
use orderboard_store::DashboardStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::select;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

/// Polls the backend and keeps the in-memory snapshot current
///
/// Each cycle fetches the full table and order lists, swaps them into the
/// store, and refreshes the occupancy gauges. A failed cycle leaves the
/// previous snapshot visible.
pub struct FeedEngine {
    client: BackendClient,
    store: Arc<DashboardStore>,
    refresh: RefreshConfig,
}

impl FeedEngine {
    pub fn new(config: &ServiceConfig, store: Arc<DashboardStore>) -> Self {
        Self {
            client: BackendClient::new(&config.backend_url),
            store,
            refresh: config.refresh.clone(),
        }
    }

    /// Run the refresh loop until shutdown
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let mut ticker = tokio::time::interval(Duration::from_secs(self.refresh.interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval_secs = self.refresh.interval_secs,
            retry_attempts = self.refresh.retry_attempts,
            "Feed engine starting"
        );

        loop {
            select! {
                _ = shutdown.recv() => {
                    info!("Shutdown signal received, stopping feed engine");
                    break;
                }

                _ = ticker.tick() => {
                    if let Err(e) = self.refresh_cycle().await {
                        error!(error = %e, "Refresh cycle gave up after retries");
                        orderboard_metrics::counters::refresh_failures(1);
                        orderboard_metrics::counters::errors(1, "refresh");

                        let mut state = self.store.refresh_state.write().await;
                        state.record_failure();
                        orderboard_metrics::gauges::set_consecutive_refresh_failures(
                            state.consecutive_failures,
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// One refresh cycle with bounded retries
    async fn refresh_cycle(&self) -> Result<()> {
        let mut attempt: u32 = 0;
        loop {
            match self.refresh_once().await {
                Ok(()) => return Ok(()),
                Err(e) if attempt + 1 < self.refresh.retry_attempts.max(1) => {
                    attempt += 1;
                    warn!(error = %e, attempt, "Refresh attempt failed, retrying");
                    tokio::time::sleep(Duration::from_millis(self.refresh.retry_delay_ms)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Fetch both snapshots and swap them in
    async fn refresh_once(&self) -> Result<()> {
        let start = Instant::now();

        let tables = self.client.fetch_tables().await?;
        let orders = self.client.fetch_orders().await?;
        let order_count = orders.len();
        let table_count = tables.len();

        // Occupancy gauges come from the fresh snapshot, not the store, so a
        // concurrent reader never sees numbers from a half-swapped state.
        let statics = compute_statics(&orders);
        let serving = compute_serving_guests(&orders);
        let occupied = tables
            .iter()
            .filter(|table| classify_table(&statics, table.number).is_occupied())
            .count();
        let serving_guests: usize = serving.values().map(|guests| guests.len()).sum();

        let fetched_at = Utc::now();
        self.store.tables.replace_all(tables);
        self.store.orders.replace(orders, fetched_at);
        {
            let mut state = self.store.refresh_state.write().await;
            state.record_success(order_count, fetched_at);
        }

        orderboard_metrics::counters::refreshes(1);
        orderboard_metrics::counters::orders_ingested(order_count as u64);
        orderboard_metrics::gauges::set_snapshot_orders(order_count);
        orderboard_metrics::gauges::set_tables_total(table_count);
        orderboard_metrics::gauges::set_tables_occupied(occupied);
        orderboard_metrics::gauges::set_serving_guests(serving_guests);
        orderboard_metrics::gauges::set_consecutive_refresh_failures(0);
        orderboard_metrics::histograms::refresh_duration(start.elapsed());

        info!(
            orders = order_count,
            tables = table_count,
            occupied = occupied,
            serving_guests = serving_guests,
            refresh_ms = start.elapsed().as_millis() as u64,
            "Snapshot refreshed"
        );

        Ok(())
    }
}

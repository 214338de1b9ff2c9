use async_graphql::{Context, Object, Result};
use orderboard_core::types::OrderStatus;
use orderboard_stats::{
    compute_overview, compute_serving_guests, compute_statics, summarize_tables,
};
use orderboard_store::DashboardStore;
use std::str::FromStr;
use std::sync::Arc;

use super::types::{GqlOrder, GqlOverview, GqlServingGuest, GqlStatics, GqlTableSummary};

/// Root query type
///
/// Every resolver recomputes its view from the current snapshot; nothing is
/// cached between calls.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Global and per-table/per-guest status counts
    async fn statics(&self, ctx: &Context<'_>) -> Result<GqlStatics> {
        let store = ctx.data::<Arc<DashboardStore>>()?;
        let snapshot = store.orders.snapshot();
        Ok(GqlStatics::from(compute_statics(&snapshot.orders)))
    }

    /// One card per physical table, including tables without orders
    async fn tables(&self, ctx: &Context<'_>) -> Result<Vec<GqlTableSummary>> {
        let store = ctx.data::<Arc<DashboardStore>>()?;
        let snapshot = store.orders.snapshot();
        let tables = store.tables.get_all();

        let statics = compute_statics(&snapshot.orders);
        let serving = compute_serving_guests(&snapshot.orders);

        Ok(summarize_tables(&tables, &statics, &serving)
            .into_iter()
            .map(GqlTableSummary::from)
            .collect())
    }

    /// Card for a single table, if the table exists
    async fn table(&self, ctx: &Context<'_>, number: i32) -> Result<Option<GqlTableSummary>> {
        let store = ctx.data::<Arc<DashboardStore>>()?;
        let Some(table) = store.tables.get(number) else {
            return Ok(None);
        };

        let snapshot = store.orders.snapshot();
        let statics = compute_statics(&snapshot.orders);
        let serving = compute_serving_guests(&snapshot.orders);

        Ok(summarize_tables(&[table], &statics, &serving)
            .into_iter()
            .map(GqlTableSummary::from)
            .next())
    }

    /// Drill-down: guests at a table with their order history
    async fn serving_guests(
        &self,
        ctx: &Context<'_>,
        table_number: i32,
    ) -> Result<Vec<GqlServingGuest>> {
        let store = ctx.data::<Arc<DashboardStore>>()?;
        let snapshot = store.orders.snapshot();
        let serving = compute_serving_guests(&snapshot.orders);

        Ok(serving
            .get(&table_number)
            .map(|guests| {
                guests
                    .iter()
                    .map(|(guest_id, orders)| GqlServingGuest::new(*guest_id, orders))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Order listing with optional status and table filters
    async fn orders(
        &self,
        ctx: &Context<'_>,
        status: Option<String>,
        table_number: Option<i32>,
        #[graphql(default = 100)] limit: i32,
    ) -> Result<Vec<GqlOrder>> {
        let status = status
            .map(|s| OrderStatus::from_str(&s))
            .transpose()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let store = ctx.data::<Arc<DashboardStore>>()?;
        let snapshot = store.orders.snapshot();

        Ok(snapshot
            .orders
            .iter()
            .filter(|order| status.is_none_or(|s| order.status == s))
            .filter(|order| table_number.is_none_or(|t| order.table_number == Some(t)))
            .take(limit.max(0) as usize)
            .map(GqlOrder::from)
            .collect())
    }

    /// Quick stats for the orders header
    async fn overview(&self, ctx: &Context<'_>) -> Result<GqlOverview> {
        let store = ctx.data::<Arc<DashboardStore>>()?;
        let snapshot = store.orders.snapshot();
        Ok(GqlOverview::from(compute_overview(&snapshot.orders)))
    }

    /// Service stats (from the in-memory store)
    async fn stats(&self, ctx: &Context<'_>) -> Result<ServiceStats> {
        let store = ctx.data::<Arc<DashboardStore>>()?;
        let state = store.refresh_state.read().await;

        Ok(ServiceStats {
            snapshot_orders: store.orders.count() as i64,
            tables: store.tables.count() as i64,
            total_refreshes: state.stats.total_refreshes as i64,
            failed_refreshes: state.stats.failed_refreshes as i64,
            consecutive_failures: state.consecutive_failures as i32,
            last_refresh: state.last_refresh.map(|at| at.to_rfc3339()),
            is_live: state.is_live(),
        })
    }

    /// Health check
    async fn health(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Service statistics
#[derive(Debug, Clone, async_graphql::SimpleObject)]
pub struct ServiceStats {
    pub snapshot_orders: i64,
    pub tables: i64,
    pub total_refreshes: i64,
    pub failed_refreshes: i64,
    pub consecutive_failures: i32,
    pub last_refresh: Option<String>,
    pub is_live: bool,
}

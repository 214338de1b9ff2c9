use std::sync::Arc;
use tokio::sync::RwLock;

use crate::orders::OrderSnapshotStore;
use crate::refresh_state::RefreshState;
use crate::tables::TableStore;

/// Thread-safe in-memory store behind the dashboard
///
/// Everything here is rebuilt from backend snapshots; nothing is persisted.
#[derive(Debug)]
pub struct DashboardStore {
    pub orders: Arc<OrderSnapshotStore>,
    pub tables: Arc<TableStore>,
    pub refresh_state: Arc<RwLock<RefreshState>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(OrderSnapshotStore::new()),
            tables: Arc::new(TableStore::new()),
            refresh_state: Arc::new(RwLock::new(RefreshState::default())),
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, Utc};
use orderboard_core::types::Order;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Immutable view of the most recent order fetch
///
/// Orders keep the sequence the backend returned them in; the serving-guest
/// index depends on that sequence.
#[derive(Debug, Clone, Default)]
pub struct OrderSnapshot {
    pub orders: Vec<Order>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Holds the latest order snapshot behind a cheap pointer swap
///
/// Readers clone an `Arc` and keep a consistent view for as long as they
/// need it; a concurrent refresh never mutates what they hold.
#[derive(Debug, Default)]
pub struct OrderSnapshotStore {
    current: RwLock<Arc<OrderSnapshot>>,
}

impl OrderSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot with a freshly fetched one
    pub fn replace(&self, orders: Vec<Order>, fetched_at: DateTime<Utc>) {
        let start = Instant::now();
        let count = orders.len();
        let snapshot = Arc::new(OrderSnapshot {
            orders,
            fetched_at: Some(fetched_at),
        });

        *self.current.write() = snapshot;

        debug!(
            orders = count,
            swap_us = start.elapsed().as_micros() as u64,
            "Order snapshot replaced in memory store"
        );
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> Arc<OrderSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Number of orders in the current snapshot
    pub fn count(&self) -> usize {
        self.current.read().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

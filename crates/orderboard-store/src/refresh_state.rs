use chrono::{DateTime, Utc};

/// Consecutive failures before the feed is reported as degraded
const DEGRADED_THRESHOLD: u32 = 3;

/// Current feed mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedMode {
    /// No snapshot fetched yet
    #[default]
    Starting,
    /// Refreshing normally
    Live,
    /// Serving a stale snapshot after repeated refresh failures
    Degraded,
}

/// Refresh statistics
#[derive(Debug, Clone, Default)]
pub struct RefreshStats {
    pub total_refreshes: u64,
    pub failed_refreshes: u64,
    pub orders_seen: u64,
    pub last_snapshot_orders: usize,
}

/// Refresh-state tracking for the order feed
#[derive(Debug, Clone, Default)]
pub struct RefreshState {
    /// When the last successful refresh completed
    pub last_refresh: Option<DateTime<Utc>>,

    /// Failures since the last successful refresh
    pub consecutive_failures: u32,

    /// Current feed mode
    pub mode: FeedMode,

    /// Statistics
    pub stats: RefreshStats,
}

impl RefreshState {
    /// Record a successful refresh
    pub fn record_success(&mut self, orders: usize, at: DateTime<Utc>) {
        self.last_refresh = Some(at);
        self.consecutive_failures = 0;
        self.mode = FeedMode::Live;
        self.stats.total_refreshes += 1;
        self.stats.orders_seen += orders as u64;
        self.stats.last_snapshot_orders = orders;
    }

    /// Record a failed refresh cycle
    pub fn record_failure(&mut self) {
        self.consecutive_failures += 1;
        self.stats.failed_refreshes += 1;
        if self.consecutive_failures >= DEGRADED_THRESHOLD && self.mode == FeedMode::Live {
            self.mode = FeedMode::Degraded;
        }
    }

    /// Check whether the feed currently refreshes normally
    pub fn is_live(&self) -> bool {
        self.mode == FeedMode::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn degrades_after_repeated_failures_and_recovers_on_success() {
        let mut state = RefreshState::default();
        assert_eq!(state.mode, FeedMode::Starting);

        let at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        state.record_success(12, at);
        assert!(state.is_live());
        assert_eq!(state.stats.last_snapshot_orders, 12);

        state.record_failure();
        state.record_failure();
        assert!(state.is_live());
        state.record_failure();
        assert_eq!(state.mode, FeedMode::Degraded);
        assert_eq!(state.stats.failed_refreshes, 3);

        state.record_success(8, at);
        assert!(state.is_live());
        assert_eq!(state.consecutive_failures, 0);
        assert_eq!(state.stats.total_refreshes, 2);
        assert_eq!(state.stats.orders_seen, 20);
    }
}

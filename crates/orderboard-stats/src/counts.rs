use orderboard_core::types::OrderStatus;
use serde::{Deserialize, Serialize};

/// Per-status order counts
///
/// All five statuses are always present; a status with no orders reports
/// zero. Serializes with the backend's wire spellings as keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusCount {
    pub pending: u32,
    pub processing: u32,
    pub delivered: u32,
    pub paid: u32,
    pub rejected: u32,
}

impl StatusCount {
    /// Count one order with the given status
    pub fn record(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Processing => self.processing += 1,
            OrderStatus::Delivered => self.delivered += 1,
            OrderStatus::Paid => self.paid += 1,
            OrderStatus::Rejected => self.rejected += 1,
        }
    }

    /// Get the count for one status
    pub fn get(&self, status: OrderStatus) -> u32 {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Processing => self.processing,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Paid => self.paid,
            OrderStatus::Rejected => self.rejected,
        }
    }

    /// Field-wise sum, used by the per-table rollup
    pub fn merge(&mut self, other: &StatusCount) {
        self.pending += other.pending;
        self.processing += other.processing;
        self.delivered += other.delivered;
        self.paid += other.paid;
        self.rejected += other.rejected;
    }

    /// Total orders counted across all five statuses
    pub fn total(&self) -> u32 {
        self.pending + self.processing + self.delivered + self.paid + self.rejected
    }

    /// True while any non-terminal status (Pending, Processing, Delivered)
    /// is represented
    pub fn has_active(&self) -> bool {
        self.pending > 0 || self.processing > 0 || self.delivered > 0
    }
}

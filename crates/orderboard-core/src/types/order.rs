use crate::error::OrderboardError;
use crate::types::{DishSnapshot, Guest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Exactly one status holds for an order at any time. The five variant names
/// are the backend's wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivered,
    Paid,
    Rejected,
}

impl OrderStatus {
    /// Get all statuses, in display order
    pub const fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Delivered,
            OrderStatus::Paid,
            OrderStatus::Rejected,
        ]
    }

    /// Terminal statuses are closed business and do not count toward an
    /// active seating.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Rejected)
    }

    /// Wire spelling used by the backend API
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Paid => "Paid",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// Human label shown on cards and badges
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Waiting for kitchen",
            OrderStatus::Processing => "In preparation",
            OrderStatus::Delivered => "Delivered to table",
            OrderStatus::Paid => "Paid",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Processing" => Ok(OrderStatus::Processing),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Paid" => Ok(OrderStatus::Paid),
            "Rejected" => Ok(OrderStatus::Rejected),
            other => Err(OrderboardError::UnknownStatus(other.to_string())),
        }
    }
}

/// One order line from the current backend snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Order ID
    pub id: i64,
    /// Current order status
    pub status: OrderStatus,
    /// Physical table the order was placed from. None when the order is not
    /// table-scoped (staff-placed, or the table was deleted).
    pub table_number: Option<i32>,
    /// Guest who placed the order. None for account-placed orders.
    pub guest: Option<Guest>,
    /// Point-in-time copy of the ordered dish; stays fixed even if the dish
    /// catalog changes afterwards.
    pub dish_snapshot: DishSnapshot,
    /// Ordered quantity of the dish
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl Order {
    /// Check if the order still counts toward an active seating
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Table-scoped orders carry both a table number and a guest and are the
    /// only ones eligible for per-table aggregation.
    pub fn is_table_scoped(&self) -> bool {
        self.table_number.is_some() && self.guest.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_spellings() {
        for status in OrderStatus::all() {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn status_rejects_unknown_spelling() {
        let err = "Shipped".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, OrderboardError::UnknownStatus(s) if s == "Shipped"));
    }

    #[test]
    fn terminal_statuses() {
        assert!(OrderStatus::Paid.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(!OrderStatus::Delivered.is_terminal());
    }
}

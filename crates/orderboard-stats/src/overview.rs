use crate::counts::StatusCount;
use orderboard_core::types::Order;

/// Quick stats for the orders header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdersOverview {
    pub total_orders: usize,
    pub status: StatusCount,
    /// Sum of snapshot dish prices across the whole list. The dashboard
    /// shows the per-order unit price, not price times quantity.
    pub revenue: i64,
}

/// Reduce the snapshot into the header numbers shown above the order table.
pub fn compute_overview(orders: &[Order]) -> OrdersOverview {
    let mut overview = OrdersOverview {
        total_orders: orders.len(),
        ..Default::default()
    };
    for order in orders {
        overview.status.record(order.status);
        overview.revenue += order.dish_snapshot.price;
    }
    overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::order_with_price;
    use orderboard_core::types::OrderStatus;

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(compute_overview(&[]), OrdersOverview::default());
    }

    #[test]
    fn sums_unit_prices_and_counts_statuses() {
        let orders = vec![
            order_with_price(1, OrderStatus::Pending, Some(1), Some(10), 50_000),
            order_with_price(2, OrderStatus::Paid, Some(1), Some(10), 70_000),
            order_with_price(3, OrderStatus::Paid, None, None, 30_000),
        ];
        let overview = compute_overview(&orders);

        assert_eq!(overview.total_orders, 3);
        assert_eq!(overview.status.pending, 1);
        assert_eq!(overview.status.paid, 2);
        assert_eq!(overview.revenue, 150_000);
    }
}

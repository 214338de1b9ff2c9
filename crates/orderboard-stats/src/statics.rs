use crate::counts::StatusCount;
use orderboard_core::types::Order;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-guest counts at one table, keyed by guest id
pub type GuestCounts = BTreeMap<i64, StatusCount>;

/// Aggregated view over one order snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderStatics {
    /// Totals across every order in the snapshot
    pub status: StatusCount,
    /// table number -> guest id -> per-status counts. Restricted to orders
    /// that carry both a table number and a guest.
    pub table: BTreeMap<i32, GuestCounts>,
}

/// Aggregate an order snapshot into global and per-table/per-guest counts.
///
/// Every order counts toward the global totals. Orders without a table
/// number or without a guest are excluded from the nested map; that is
/// policy, not an error — staff-placed and account-based orders are not
/// table-scoped.
pub fn compute_statics(orders: &[Order]) -> OrderStatics {
    let mut statics = OrderStatics::default();

    for order in orders {
        statics.status.record(order.status);

        let (Some(table_number), Some(guest)) = (order.table_number, order.guest.as_ref()) else {
            continue;
        };
        statics
            .table
            .entry(table_number)
            .or_default()
            .entry(guest.id)
            .or_default()
            .record(order.status);
    }

    statics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::order;
    use orderboard_core::types::OrderStatus;

    #[test]
    fn empty_snapshot_yields_zeroed_output() {
        let statics = compute_statics(&[]);
        assert_eq!(statics.status, StatusCount::default());
        assert_eq!(statics.status.total(), 0);
        assert!(statics.table.is_empty());
    }

    #[test]
    fn global_totals_conserve_input_length() {
        let orders = vec![
            order(1, OrderStatus::Pending, Some(1), Some(10)),
            order(2, OrderStatus::Processing, Some(2), Some(20)),
            order(3, OrderStatus::Delivered, None, Some(30)),
            order(4, OrderStatus::Paid, Some(3), None),
            order(5, OrderStatus::Rejected, None, None),
            order(6, OrderStatus::Pending, Some(1), Some(10)),
        ];
        let statics = compute_statics(&orders);
        assert_eq!(statics.status.total() as usize, orders.len());
    }

    #[test]
    fn nested_counts_group_by_table_then_guest() {
        let orders = vec![
            order(1, OrderStatus::Pending, Some(1), Some(10)),
            order(2, OrderStatus::Paid, Some(1), Some(10)),
            order(3, OrderStatus::Pending, Some(1), Some(11)),
        ];
        let statics = compute_statics(&orders);

        assert_eq!(
            statics.status,
            StatusCount {
                pending: 2,
                paid: 1,
                ..Default::default()
            }
        );

        let table_one = &statics.table[&1];
        assert_eq!(table_one.len(), 2);
        assert_eq!(
            table_one[&10],
            StatusCount {
                pending: 1,
                paid: 1,
                ..Default::default()
            }
        );
        assert_eq!(
            table_one[&11],
            StatusCount {
                pending: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn orders_without_table_or_guest_count_globally_only() {
        let orders = vec![order(1, OrderStatus::Pending, None, None)];
        let statics = compute_statics(&orders);

        assert_eq!(statics.status.pending, 1);
        assert!(statics.table.is_empty());

        // One leg present is not enough either way.
        let statics = compute_statics(&[
            order(2, OrderStatus::Processing, Some(4), None),
            order(3, OrderStatus::Delivered, None, Some(40)),
        ]);
        assert_eq!(statics.status.total(), 2);
        assert!(statics.table.is_empty());
    }

    #[test]
    fn recomputing_the_same_snapshot_is_deterministic() {
        let orders = vec![
            order(1, OrderStatus::Pending, Some(1), Some(10)),
            order(2, OrderStatus::Paid, Some(2), Some(20)),
            order(3, OrderStatus::Rejected, None, None),
        ];
        assert_eq!(compute_statics(&orders), compute_statics(&orders));
    }

    #[test]
    fn nested_count_objects_serialize_complete() {
        let orders = vec![order(1, OrderStatus::Delivered, Some(9), Some(90))];
        let json = serde_json::to_value(compute_statics(&orders)).unwrap();

        let guest = &json["table"]["9"]["90"];
        assert_eq!(guest.as_object().unwrap().len(), 5);
        assert_eq!(guest["Delivered"], 1);
        assert_eq!(guest["Rejected"], 0);
    }
}

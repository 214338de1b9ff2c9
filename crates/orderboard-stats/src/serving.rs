use orderboard_core::types::Order;
use std::collections::BTreeMap;

/// table number -> guest id -> that guest's orders, in snapshot order
///
/// A guest appears here while they have at least one order at the table in
/// the current snapshot, regardless of status — the aggregation reports, it
/// does not decide who is still seated. Pairs with zero qualifying orders
/// get no entry.
pub type ServingGuestsByTable = BTreeMap<i32, BTreeMap<i64, Vec<Order>>>;

/// Index table-scoped orders by table and guest for the drill-down view.
///
/// Input order is preserved per guest; the drill-down displays order history
/// chronologically as fetched.
pub fn compute_serving_guests(orders: &[Order]) -> ServingGuestsByTable {
    let mut serving: ServingGuestsByTable = BTreeMap::new();

    for order in orders {
        let (Some(table_number), Some(guest)) = (order.table_number, order.guest.as_ref()) else {
            continue;
        };
        serving
            .entry(table_number)
            .or_default()
            .entry(guest.id)
            .or_default()
            .push(order.clone());
    }

    serving
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::order;
    use orderboard_core::types::OrderStatus;

    #[test]
    fn empty_snapshot_yields_empty_map() {
        assert!(compute_serving_guests(&[]).is_empty());
    }

    #[test]
    fn groups_by_table_and_guest_preserving_input_order() {
        let orders = vec![
            order(5, OrderStatus::Paid, Some(1), Some(10)),
            order(2, OrderStatus::Pending, Some(1), Some(11)),
            order(9, OrderStatus::Processing, Some(1), Some(10)),
            order(1, OrderStatus::Delivered, Some(2), Some(10)),
        ];
        let serving = compute_serving_guests(&orders);

        let guest_ten: Vec<i64> = serving[&1][&10].iter().map(|o| o.id).collect();
        assert_eq!(guest_ten, vec![5, 9]);

        assert_eq!(serving[&1][&11].len(), 1);
        assert_eq!(serving[&2][&10].len(), 1);
        assert!(serving.get(&3).is_none());
    }

    #[test]
    fn guests_with_only_terminal_orders_remain_listed() {
        let orders = vec![
            order(1, OrderStatus::Paid, Some(4), Some(40)),
            order(2, OrderStatus::Rejected, Some(4), Some(40)),
        ];
        let serving = compute_serving_guests(&orders);
        assert_eq!(serving[&4][&40].len(), 2);
    }

    #[test]
    fn excludes_orders_missing_table_or_guest() {
        let orders = vec![
            order(1, OrderStatus::Pending, None, None),
            order(2, OrderStatus::Pending, Some(1), None),
            order(3, OrderStatus::Pending, None, Some(10)),
        ];
        assert!(compute_serving_guests(&orders).is_empty());
    }

    #[test]
    fn recomputing_the_same_snapshot_is_deterministic() {
        let orders = vec![
            order(1, OrderStatus::Pending, Some(1), Some(10)),
            order(2, OrderStatus::Paid, Some(1), Some(10)),
        ];
        assert_eq!(
            compute_serving_guests(&orders),
            compute_serving_guests(&orders)
        );
    }
}

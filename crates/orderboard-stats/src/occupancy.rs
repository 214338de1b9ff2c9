use crate::counts::StatusCount;
use crate::serving::ServingGuestsByTable;
use crate::statics::OrderStatics;
use orderboard_core::types::Table;

/// Whether a table currently has an active seating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOccupancy {
    Vacant,
    Occupied,
}

impl TableOccupancy {
    pub fn is_occupied(self) -> bool {
        matches!(self, TableOccupancy::Occupied)
    }
}

/// Classify one table from the aggregated statics.
///
/// A table is occupied only while some guest there still holds an order in
/// Pending, Processing or Delivered. Three input cases collapse to two
/// outcomes: no guests at all -> vacant; guests whose orders are all
/// Paid/Rejected -> vacant (closed business, not an active seating); any
/// guest with a non-terminal order -> occupied.
pub fn classify_table(statics: &OrderStatics, table_number: i32) -> TableOccupancy {
    let Some(guests) = statics.table.get(&table_number) else {
        return TableOccupancy::Vacant;
    };
    if guests.values().any(StatusCount::has_active) {
        TableOccupancy::Occupied
    } else {
        TableOccupancy::Vacant
    }
}

/// Field-wise sum of every guest's counts at a table.
///
/// A table with no entry in the statics rolls up to all zeroes.
pub fn table_rollup(statics: &OrderStatics, table_number: i32) -> StatusCount {
    let mut rollup = StatusCount::default();
    if let Some(guests) = statics.table.get(&table_number) {
        for counts in guests.values() {
            rollup.merge(counts);
        }
    }
    rollup
}

/// Card datum for one physical table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub number: i32,
    pub capacity: i32,
    pub occupancy: TableOccupancy,
    /// Guests currently listed at the table, regardless of order status
    pub serving_guests: usize,
    /// Rollup across all guests at the table
    pub counts: StatusCount,
}

/// Produce a card for every table in the reference list, including tables
/// with no orders at all.
pub fn summarize_tables(
    tables: &[Table],
    statics: &OrderStatics,
    serving: &ServingGuestsByTable,
) -> Vec<TableSummary> {
    tables
        .iter()
        .map(|table| TableSummary {
            number: table.number,
            capacity: table.capacity,
            occupancy: classify_table(statics, table.number),
            serving_guests: serving.get(&table.number).map_or(0, |guests| guests.len()),
            counts: table_rollup(statics, table.number),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serving::compute_serving_guests;
    use crate::statics::compute_statics;
    use crate::testutil::order;
    use orderboard_core::types::OrderStatus;

    #[test]
    fn table_with_no_orders_is_vacant() {
        let statics = compute_statics(&[]);
        assert_eq!(classify_table(&statics, 1), TableOccupancy::Vacant);
    }

    #[test]
    fn table_with_only_terminal_orders_is_vacant() {
        let orders = vec![
            order(1, OrderStatus::Paid, Some(2), Some(20)),
            order(2, OrderStatus::Rejected, Some(2), Some(20)),
        ];
        let statics = compute_statics(&orders);

        assert_eq!(classify_table(&statics, 2), TableOccupancy::Vacant);
        // Historical rows still roll up.
        assert_eq!(
            table_rollup(&statics, 2),
            StatusCount {
                paid: 1,
                rejected: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn any_non_terminal_order_occupies_the_table() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Delivered,
        ] {
            let orders = vec![
                order(1, OrderStatus::Paid, Some(3), Some(30)),
                order(2, status, Some(3), Some(31)),
            ];
            let statics = compute_statics(&orders);
            assert_eq!(
                classify_table(&statics, 3),
                TableOccupancy::Occupied,
                "{status} should occupy the table"
            );
        }
    }

    #[test]
    fn rollup_of_unknown_table_is_all_zero() {
        let orders = vec![order(1, OrderStatus::Pending, Some(1), Some(10))];
        let statics = compute_statics(&orders);
        assert_eq!(table_rollup(&statics, 99), StatusCount::default());
    }

    #[test]
    fn rollup_sums_across_guests() {
        let orders = vec![
            order(1, OrderStatus::Pending, Some(1), Some(10)),
            order(2, OrderStatus::Paid, Some(1), Some(10)),
            order(3, OrderStatus::Pending, Some(1), Some(11)),
        ];
        let statics = compute_statics(&orders);
        assert_eq!(
            table_rollup(&statics, 1),
            StatusCount {
                pending: 2,
                paid: 1,
                ..Default::default()
            }
        );
        assert_eq!(classify_table(&statics, 1), TableOccupancy::Occupied);
    }

    #[test]
    fn summaries_cover_every_listed_table() {
        let tables = vec![
            Table {
                number: 1,
                capacity: 4,
            },
            Table {
                number: 2,
                capacity: 2,
            },
            Table {
                number: 3,
                capacity: 6,
            },
        ];
        let orders = vec![
            order(1, OrderStatus::Processing, Some(1), Some(10)),
            order(2, OrderStatus::Paid, Some(2), Some(20)),
        ];
        let statics = compute_statics(&orders);
        let serving = compute_serving_guests(&orders);

        let summaries = summarize_tables(&tables, &statics, &serving);
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].occupancy, TableOccupancy::Occupied);
        assert_eq!(summaries[0].serving_guests, 1);
        assert_eq!(summaries[0].counts.processing, 1);

        // Guest 20 is still listed even though the table reads vacant.
        assert_eq!(summaries[1].occupancy, TableOccupancy::Vacant);
        assert_eq!(summaries[1].serving_guests, 1);

        assert_eq!(summaries[2].occupancy, TableOccupancy::Vacant);
        assert_eq!(summaries[2].serving_guests, 0);
        assert_eq!(summaries[2].counts, StatusCount::default());
    }
}

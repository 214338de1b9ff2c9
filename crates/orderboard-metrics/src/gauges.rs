use metrics::{describe_gauge, gauge};

/// Initialize gauge descriptions
pub fn init() {
    describe_gauge!(
        "orderboard_snapshot_orders",
        "Number of orders in the current snapshot"
    );
    describe_gauge!(
        "orderboard_tables_total",
        "Number of tables known to the store"
    );
    describe_gauge!(
        "orderboard_tables_occupied",
        "Number of tables with at least one non-terminal order"
    );
    describe_gauge!(
        "orderboard_serving_guests",
        "Number of guests currently listed across all tables"
    );
    describe_gauge!(
        "orderboard_consecutive_refresh_failures",
        "Refresh failures since the last successful refresh"
    );
}

/// Set snapshot order count gauge
pub fn set_snapshot_orders(count: usize) {
    gauge!("orderboard_snapshot_orders").set(count as f64);
}

/// Set known tables gauge
pub fn set_tables_total(count: usize) {
    gauge!("orderboard_tables_total").set(count as f64);
}

/// Set occupied tables gauge
pub fn set_tables_occupied(count: usize) {
    gauge!("orderboard_tables_occupied").set(count as f64);
}

/// Set serving guests gauge
pub fn set_serving_guests(count: usize) {
    gauge!("orderboard_serving_guests").set(count as f64);
}

/// Set consecutive refresh failures gauge
pub fn set_consecutive_refresh_failures(count: u32) {
    gauge!("orderboard_consecutive_refresh_failures").set(count as f64);
}

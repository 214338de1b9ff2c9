use metrics::{counter, describe_counter};

/// Initialize counter descriptions
pub fn init() {
    describe_counter!(
        "orderboard_refreshes_total",
        "Total number of successful snapshot refreshes"
    );
    describe_counter!(
        "orderboard_refresh_failures_total",
        "Total number of refresh cycles that gave up after retries"
    );
    describe_counter!(
        "orderboard_orders_ingested_total",
        "Total number of orders ingested across all refreshes"
    );
    describe_counter!(
        "orderboard_errors_total",
        "Total number of errors"
    );
}

/// Increment successful refreshes counter
pub fn refreshes(count: u64) {
    counter!("orderboard_refreshes_total").increment(count);
}

/// Increment failed refresh cycles counter
pub fn refresh_failures(count: u64) {
    counter!("orderboard_refresh_failures_total").increment(count);
}

/// Increment ingested orders counter
pub fn orders_ingested(count: u64) {
    counter!("orderboard_orders_ingested_total").increment(count);
}

/// Increment errors counter
pub fn errors(count: u64, error_type: &str) {
    counter!("orderboard_errors_total", "type" => error_type.to_string()).increment(count);
}

use metrics::{describe_histogram, histogram};
use std::time::Duration;

/// Initialize histogram descriptions
pub fn init() {
    describe_histogram!(
        "orderboard_refresh_duration_seconds",
        "Time to fetch and swap in a full snapshot"
    );
    describe_histogram!(
        "orderboard_backend_request_duration_seconds",
        "Time for a single backend request"
    );
}

/// Record refresh duration
pub fn refresh_duration(duration: Duration) {
    histogram!("orderboard_refresh_duration_seconds").record(duration.as_secs_f64());
}

/// Record backend request duration
pub fn backend_request_duration(duration: Duration, endpoint: &str) {
    histogram!("orderboard_backend_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(duration.as_secs_f64());
}

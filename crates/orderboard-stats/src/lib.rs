pub mod counts;
pub mod occupancy;
pub mod overview;
pub mod serving;
pub mod statics;

pub use counts::StatusCount;
pub use occupancy::{classify_table, summarize_tables, table_rollup, TableOccupancy, TableSummary};
pub use overview::{compute_overview, OrdersOverview};
pub use serving::{compute_serving_guests, ServingGuestsByTable};
pub use statics::{compute_statics, GuestCounts, OrderStatics};

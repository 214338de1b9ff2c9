mod orders;
mod refresh_state;
mod store;
mod tables;

pub use orders::{OrderSnapshot, OrderSnapshotStore};
pub use refresh_state::{FeedMode, RefreshState, RefreshStats};
pub use store::DashboardStore;
pub use tables::TableStore;

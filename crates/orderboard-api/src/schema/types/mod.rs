mod order;
mod statics;
mod table;

pub use order::{GqlOrder, GqlServingGuest};
pub use statics::{GqlGuestCounts, GqlOverview, GqlStatics, GqlStatusCount, GqlTableStatics};
pub use table::GqlTableSummary;

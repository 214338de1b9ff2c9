use super::statics::GqlStatusCount;
use async_graphql::SimpleObject;
use orderboard_stats::TableSummary;

/// Card datum for one physical table
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlTableSummary {
    pub number: i32,
    pub capacity: i32,
    /// False while every order at the table is Paid or Rejected
    pub occupied: bool,
    /// Guests listed at the table, regardless of order status
    pub serving_guests: i32,
    /// Rollup across all guests at the table
    pub counts: GqlStatusCount,
}

impl From<TableSummary> for GqlTableSummary {
    fn from(summary: TableSummary) -> Self {
        Self {
            number: summary.number,
            capacity: summary.capacity,
            occupied: summary.occupancy.is_occupied(),
            serving_guests: summary.serving_guests as i32,
            counts: summary.counts.into(),
        }
    }
}

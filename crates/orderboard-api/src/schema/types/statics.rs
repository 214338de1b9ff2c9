use async_graphql::SimpleObject;
use orderboard_stats::{OrderStatics, OrdersOverview, StatusCount};

/// GraphQL per-status counts; all five statuses always present
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlStatusCount {
    pub pending: i32,
    pub processing: i32,
    pub delivered: i32,
    pub paid: i32,
    pub rejected: i32,
}

impl From<StatusCount> for GqlStatusCount {
    fn from(counts: StatusCount) -> Self {
        Self {
            pending: counts.pending as i32,
            processing: counts.processing as i32,
            delivered: counts.delivered as i32,
            paid: counts.paid as i32,
            rejected: counts.rejected as i32,
        }
    }
}

/// One guest's counts at a table
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlGuestCounts {
    pub guest_id: i64,
    pub counts: GqlStatusCount,
}

/// Per-guest counts for one table
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlTableStatics {
    pub table_number: i32,
    pub guests: Vec<GqlGuestCounts>,
}

/// GraphQL view of the aggregated statics
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlStatics {
    /// Totals across every order in the snapshot
    pub status: GqlStatusCount,
    /// Nested per-table, per-guest counts for table-scoped orders
    pub tables: Vec<GqlTableStatics>,
}

impl From<OrderStatics> for GqlStatics {
    fn from(statics: OrderStatics) -> Self {
        Self {
            status: statics.status.into(),
            tables: statics
                .table
                .into_iter()
                .map(|(table_number, guests)| GqlTableStatics {
                    table_number,
                    guests: guests
                        .into_iter()
                        .map(|(guest_id, counts)| GqlGuestCounts {
                            guest_id,
                            counts: counts.into(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Quick stats shown above the order table
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlOverview {
    pub total_orders: i64,
    pub status: GqlStatusCount,
    pub revenue: i64,
}

impl From<OrdersOverview> for GqlOverview {
    fn from(overview: OrdersOverview) -> Self {
        Self {
            total_orders: overview.total_orders as i64,
            status: overview.status.into(),
            revenue: overview.revenue,
        }
    }
}

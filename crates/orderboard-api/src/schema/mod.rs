pub mod query;
pub mod types;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use orderboard_store::DashboardStore;
use std::sync::Arc;

pub use query::QueryRoot;

/// GraphQL Schema type
pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Context shared across GraphQL resolvers
pub struct ApiContext {
    pub store: Arc<DashboardStore>,
}

impl ApiContext {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }
}

/// Build the GraphQL schema
pub fn build_schema(ctx: ApiContext) -> ApiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(ctx.store)
        .finish()
}

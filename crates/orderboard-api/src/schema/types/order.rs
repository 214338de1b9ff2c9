use async_graphql::SimpleObject;
use orderboard_core::types::Order;

/// GraphQL Order type
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlOrder {
    pub id: i64,
    /// Wire spelling of the status
    pub status: String,
    /// Human label for cards and badges
    pub status_label: String,
    pub table_number: Option<i32>,
    pub guest_id: Option<i64>,
    pub guest_name: Option<String>,
    pub dish_name: String,
    pub dish_price: i64,
    pub quantity: i32,
    pub created_at: String,
}

impl From<&Order> for GqlOrder {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            status: order.status.to_string(),
            status_label: order.status.label().to_string(),
            table_number: order.table_number,
            guest_id: order.guest.as_ref().map(|guest| guest.id),
            guest_name: order.guest.as_ref().map(|guest| guest.name.clone()),
            dish_name: order.dish_snapshot.name.clone(),
            dish_price: order.dish_snapshot.price,
            quantity: order.quantity,
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

/// One guest in the drill-down view, with their full order history for the
/// current snapshot
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlServingGuest {
    pub guest_id: i64,
    pub guest_name: String,
    pub orders: Vec<GqlOrder>,
}

impl GqlServingGuest {
    pub fn new(guest_id: i64, orders: &[Order]) -> Self {
        let guest_name = orders
            .first()
            .and_then(|order| order.guest.as_ref())
            .map(|guest| guest.name.clone())
            .unwrap_or_default();

        Self {
            guest_id,
            guest_name,
            orders: orders.iter().map(GqlOrder::from).collect(),
        }
    }
}

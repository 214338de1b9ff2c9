/// Physical restaurant table
///
/// The number doubles as identity and display label. Tables have a lifecycle
/// independent from orders: an order may outlive its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub number: i32,
    pub capacity: i32,
}

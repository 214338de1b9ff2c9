/// Point-in-time copy of a dish at order time
///
/// Immutable once taken; later catalog edits never touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishSnapshot {
    pub id: i64,
    pub name: String,
    /// Unit price in the smallest currency unit
    pub price: i64,
}

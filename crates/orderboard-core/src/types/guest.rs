/// Guest identity attached to a table-scoped order
///
/// Guests are unauthenticated per-table-session patrons, distinct from staff
/// accounts. Only the id is guaranteed unique; the name is a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

mod dish;
mod guest;
mod order;
mod table;

pub use dish::DishSnapshot;
pub use guest::Guest;
pub use order::{Order, OrderStatus};
pub use table::Table;

//! Orders domain module.
//!
//! The order entity with its line items, the order persistence seam, and the
//! order creation service (customer resolution, product resolution, stock
//! validation, conditional commit).

pub mod creator;
pub mod order;
pub mod store;

pub use creator::OrderCreator;
pub use order::{NewOrder, Order, OrderId, OrderItem, OrderLine};
pub use store::OrderStore;

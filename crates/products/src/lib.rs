//! Products domain module.
//!
//! The product entity and its persistence seam. Products are never created or
//! deleted by this core; order creation only decrements their stock.

pub mod product;
pub mod store;

pub use product::{Product, ProductId, StockDecrement};
pub use store::ProductStore;

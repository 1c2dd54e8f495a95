//! Customers domain module.
//!
//! This crate contains the customer entity, its persistence seam, and the
//! registration service (no IO of its own; storage is behind [`CustomerStore`]).

pub mod customer;
pub mod registrar;
pub mod store;

pub use customer::{Customer, CustomerId, NewCustomer};
pub use registrar::CustomerRegistrar;
pub use store::CustomerStore;

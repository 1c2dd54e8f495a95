//! Storage implementations backing the domain store traits.
//!
//! Only the in-memory stores live here. Real backends (a database behind the
//! same traits) are external collaborators wired in by the hosting layer.

pub mod memory;

pub use memory::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore};

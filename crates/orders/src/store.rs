//! Persistence seam for orders.

use async_trait::async_trait;

use storefront_core::StoreError;

use crate::order::{NewOrder, Order};

/// Abstract persistence collaborator for orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist the order and its items as one unit, stamping `ordered_at`.
    async fn create(&self, new: NewOrder) -> Result<Order, StoreError>;
}

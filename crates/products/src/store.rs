//! Persistence seam for products.

use async_trait::async_trait;

use storefront_core::{ServiceError, StoreError};

use crate::product::{Product, ProductId, StockDecrement};

/// Abstract persistence collaborator for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Batch lookup. Returns only the matching records; order is unspecified
    /// and unknown ids are silently skipped (the caller compares counts).
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError>;

    /// Atomically apply a batch of stock decrements.
    ///
    /// Either every decrement applies or none does. The store re-checks
    /// availability at apply time: a product that would go below zero fails
    /// the whole batch with [`storefront_core::DomainError::InsufficientStock`],
    /// an id that no longer resolves fails it with
    /// [`storefront_core::DomainError::InvalidProducts`]. Returns the service
    /// error union because both domain and infrastructure kinds can occur.
    async fn decrement_stock(&self, decrements: &[StockDecrement]) -> Result<(), ServiceError>;
}

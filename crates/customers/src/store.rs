//! Persistence seam for customers.

use async_trait::async_trait;

use storefront_core::StoreError;

use crate::customer::{Customer, CustomerId, NewCustomer};

/// Abstract persistence collaborator for customers.
///
/// Implementations live outside the domain crates; `storefront-infra`
/// provides the in-memory one used in tests/dev.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, StoreError>;

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    /// Persist a new customer and return the stored record.
    async fn create(&self, new: NewCustomer) -> Result<Customer, StoreError>;
}

//! Customer registration service.

use storefront_core::{DomainError, ServiceError};

use crate::customer::{Customer, NewCustomer};
use crate::store::CustomerStore;

/// Registers customers, enforcing email uniqueness at creation time.
///
/// The uniqueness check is a pre-check against the store, not a storage
/// constraint; two racing registrations with the same email can both pass it.
/// Closing that race is the store's concern.
pub struct CustomerRegistrar<'a> {
    customers: &'a dyn CustomerStore,
}

impl<'a> CustomerRegistrar<'a> {
    pub fn new(customers: &'a dyn CustomerStore) -> Self {
        Self { customers }
    }

    /// Register a new customer.
    ///
    /// Fails with [`DomainError::DuplicateEmail`] if the email is already
    /// registered; on success exactly one customer record is persisted and
    /// returned.
    pub async fn register(&self, new: NewCustomer) -> Result<Customer, ServiceError> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty").into());
        }
        if new.email.trim().is_empty() {
            return Err(DomainError::validation("email must not be empty").into());
        }

        if self.customers.find_by_email(&new.email).await?.is_some() {
            return Err(DomainError::duplicate_email(&new.email).into());
        }

        let customer = self.customers.create(new).await?;
        tracing::info!(customer_id = %customer.id, "customer registered");

        Ok(customer)
    }
}

//! In-memory store implementations.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::{AggregateId, DomainError, ServiceError, StoreError};
use storefront_customers::{Customer, CustomerId, CustomerStore, NewCustomer};
use storefront_orders::{NewOrder, Order, OrderId, OrderStore};
use storefront_products::{Product, ProductId, ProductStore, StockDecrement};

fn poisoned() -> StoreError {
    StoreError::unavailable("lock poisoned")
}

/// In-memory customer store.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.customers.read().map(|m| m.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, StoreError> {
        let map = self.customers.read().map_err(|_| poisoned())?;
        Ok(map.values().find(|c| c.email == email).cloned())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let map = self.customers.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn create(&self, new: NewCustomer) -> Result<Customer, StoreError> {
        let customer = Customer {
            id: CustomerId::new(AggregateId::new()),
            name: new.name,
            email: new.email,
        };
        let mut map = self.customers.write().map_err(|_| poisoned())?;
        map.insert(customer.id, customer.clone());
        Ok(customer)
    }
}

/// In-memory product store.
///
/// `decrement_stock` applies the whole batch under one write lock, so racing
/// order creations cannot both pass the availability re-check.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product. Products are not created by the services, so tests and
    /// dev setups insert them directly.
    pub fn insert(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id, product);
        }
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.read().ok()?.get(&id).cloned()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        Ok(ids.iter().filter_map(|id| map.get(id).cloned()).collect())
    }

    async fn decrement_stock(&self, decrements: &[StockDecrement]) -> Result<(), ServiceError> {
        let mut map = self
            .products
            .write()
            .map_err(|_| ServiceError::Store(poisoned()))?;

        // Re-check the whole batch before touching anything, so a failure
        // leaves every quantity unchanged.
        for dec in decrements {
            let product = map.get(&dec.product_id).ok_or_else(|| {
                DomainError::invalid_products(format!("product {} does not exist", dec.product_id))
            })?;
            if product.quantity < dec.quantity {
                return Err(DomainError::insufficient_stock(format!(
                    "product {}: requested {}, available {}",
                    dec.product_id, dec.quantity, product.quantity
                ))
                .into());
            }
        }

        for dec in decrements {
            if let Some(product) = map.get_mut(&dec.product_id) {
                product.quantity -= dec.quantity;
            }
        }

        Ok(())
    }
}

/// In-memory order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.read().ok()?.get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.orders.read().map(|m| m.len()).unwrap_or(0)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, new: NewOrder) -> Result<Order, StoreError> {
        let order = Order {
            id: OrderId::new(AggregateId::new()),
            customer: new.customer,
            items: new.items,
            ordered_at: Utc::now(),
        };
        let mut map = self.orders.write().map_err(|_| poisoned())?;
        map.insert(order.id, order.clone());
        Ok(order)
    }
}

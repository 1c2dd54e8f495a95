//! Order creation service.

use std::collections::HashMap;

use storefront_core::{DomainError, ServiceError};
use storefront_customers::{CustomerId, CustomerStore};
use storefront_products::{Product, ProductId, ProductStore, StockDecrement};

use crate::order::{NewOrder, Order, OrderItem, OrderLine};
use crate::store::OrderStore;

/// Creates orders: resolves the customer, batch-resolves every requested
/// product, checks stock, then commits the decrement and the order.
///
/// All validation runs before any mutation. The stock decrement itself is a
/// single conditional batch at the product store, so an invocation racing
/// this one cannot drive stock negative even though the pre-check reads may
/// be stale.
pub struct OrderCreator<'a> {
    customers: &'a dyn CustomerStore,
    products: &'a dyn ProductStore,
    orders: &'a dyn OrderStore,
}

impl<'a> OrderCreator<'a> {
    pub fn new(
        customers: &'a dyn CustomerStore,
        products: &'a dyn ProductStore,
        orders: &'a dyn OrderStore,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Create an order for `customer_id` from the requested lines.
    ///
    /// Failure kinds, in check order: [`DomainError::Validation`] (empty
    /// request, zero quantity), [`DomainError::InvalidProducts`] (duplicate
    /// line for one product), [`DomainError::CustomerNotFound`],
    /// [`DomainError::InvalidProducts`] (unresolved ids),
    /// [`DomainError::InsufficientStock`]. Each leaves every store unchanged.
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        lines: Vec<OrderLine>,
    ) -> Result<Order, ServiceError> {
        if lines.is_empty() {
            return Err(DomainError::validation("order must contain at least one line").into());
        }
        if lines.iter().any(|l| l.quantity == 0) {
            return Err(DomainError::validation("line quantity must be positive").into());
        }

        // Requested quantity per distinct product id. A product appearing on
        // two lines is rejected rather than aggregated; see DESIGN notes.
        let mut requested: HashMap<ProductId, u64> = HashMap::with_capacity(lines.len());
        for line in &lines {
            if requested.insert(line.product_id, line.quantity).is_some() {
                return Err(DomainError::invalid_products(format!(
                    "product {} appears on more than one line",
                    line.product_id
                ))
                .into());
            }
        }

        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(DomainError::CustomerNotFound)?;

        let ids: Vec<ProductId> = requested.keys().copied().collect();
        let found = self.products.find_all_by_id(&ids).await?;

        let by_id: HashMap<ProductId, &Product> = found.iter().map(|p| (p.id, p)).collect();
        if by_id.len() != requested.len() {
            return Err(DomainError::invalid_products(format!(
                "{} of {} requested products exist",
                by_id.len(),
                requested.len()
            ))
            .into());
        }

        // Sufficiency pre-check on the quantities read above. The store
        // re-checks under its own lock when the decrement is applied.
        let mut items = Vec::with_capacity(lines.len());
        let mut decrements = Vec::with_capacity(lines.len());
        for line in &lines {
            let product = by_id.get(&line.product_id).ok_or_else(|| {
                DomainError::invalid_products(format!("product {} does not exist", line.product_id))
            })?;
            if product.quantity < line.quantity {
                return Err(DomainError::insufficient_stock(format!(
                    "product {}: requested {}, available {}",
                    product.id, line.quantity, product.quantity
                ))
                .into());
            }
            items.push(OrderItem {
                product_id: product.id,
                price: product.price,
                quantity: line.quantity,
            });
            decrements.push(StockDecrement {
                product_id: product.id,
                quantity: line.quantity,
            });
        }

        self.products.decrement_stock(&decrements).await?;

        let order = self.orders.create(NewOrder { customer, items }).await?;
        tracing::info!(
            order_id = %order.id,
            customer_id = %order.customer.id,
            lines = order.items.len(),
            "order created"
        );

        Ok(order)
    }
}

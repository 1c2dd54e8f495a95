use serde::{Deserialize, Serialize};

use storefront_core::{AggregateId, Entity};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    /// Quantity in stock. `u64` makes "never below zero" structural; the
    /// decrement path uses checked subtraction.
    pub quantity: u64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One product's decrement amount within a batched stock update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDecrement {
    pub product_id: ProductId,
    /// How much to subtract from the current stock (not an absolute target,
    /// so concurrent decrements compose instead of overwriting each other).
    pub quantity: u64,
}

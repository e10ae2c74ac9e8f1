//! Shopping cart keyed by product id.
//!
//! The cart only stores quantities. Everything shown to a shopper (lines,
//! totals) is derived against the [`Catalog`] on demand, in catalog order.
//!
//! Invariant: every stored quantity is at least 1. Decrementing an entry to
//! zero removes it, so an absent entry and a zero quantity are the same
//! thing.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, Product};
use crate::types::{Price, ProductId};

/// Errors raised by cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

/// Product id to quantity mapping.
///
/// Serialized as a plain map. Zero quantities in the input are dropped on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ProductId, u32>",
    into = "BTreeMap<ProductId, u32>"
)]
pub struct Cart {
    quantities: BTreeMap<ProductId, u32>,
}

impl From<BTreeMap<ProductId, u32>> for Cart {
    fn from(mut quantities: BTreeMap<ProductId, u32>) -> Self {
        quantities.retain(|_, quantity| *quantity > 0);
        Self { quantities }
    }
}

impl From<Cart> for BTreeMap<ProductId, u32> {
    fn from(cart: Cart) -> Self {
        cart.quantities
    }
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity of `id` in the cart, 0 when absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    /// Add one unit of `id` and return the new quantity.
    ///
    /// Callers are expected to pass ids taken from the catalog; see
    /// [`ShopState::add_to_cart`](crate::shop::ShopState::add_to_cart) for
    /// the checked variant.
    ///
    /// Saturates at `u32::MAX`. At that quantity an increment followed by a
    /// decrement leaves one unit fewer than before.
    pub fn increment(&mut self, id: ProductId) -> u32 {
        let quantity = self.quantities.entry(id).or_insert(0);
        *quantity = quantity.saturating_add(1);
        *quantity
    }

    /// Remove one unit of `id` and return what is left.
    ///
    /// The last unit removes the entry. Absent entries stay absent.
    pub fn decrement(&mut self, id: ProductId) -> u32 {
        match self.quantities.get_mut(&id) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                *quantity
            }
            Some(_) => {
                self.quantities.remove(&id);
                0
            }
            None => 0,
        }
    }

    /// Stored `(id, quantity)` entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.quantities.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Cart lines in catalog order.
    #[must_use]
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        catalog
            .products()
            .iter()
            .filter_map(|product| {
                let quantity = self.quantity(product.id);
                (quantity > 0).then_some(CartLine { product, quantity })
            })
            .collect()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total_price(&self, catalog: &Catalog) -> Decimal {
        self.lines(catalog).iter().map(CartLine::line_total).sum()
    }

    /// Everything the cart page needs in one pass.
    #[must_use]
    pub fn summary<'a>(&self, catalog: &'a Catalog) -> CartSummary<'a> {
        let lines = self.lines(catalog);
        let total_price = lines.iter().map(CartLine::line_total).sum();
        let count_unit = shared_unit(&lines);

        CartSummary {
            lines,
            total_price,
            total_count: self.total_count(),
            count_unit,
        }
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartLine<'_> {
    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Derived cart totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary<'a> {
    pub lines: Vec<CartLine<'a>>,
    pub total_price: Decimal,
    pub total_count: u64,
    /// Unit shared by every line, if they all agree. `None` for an empty
    /// cart or mixed units, where the count is a number of items rather
    /// than a measure.
    pub count_unit: Option<&'a str>,
}

impl CartSummary<'_> {
    #[must_use]
    pub const fn total(&self) -> Price {
        Price::rubles(self.total_price)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn shared_unit<'a>(lines: &[CartLine<'a>]) -> Option<&'a str> {
    let (first, rest) = lines.split_first()?;
    let unit = first.product.unit.as_str();
    rest.iter()
        .all(|line| line.product.unit == unit)
        .then_some(unit)
}

//! Per-shopper storefront state.
//!
//! [`ShopState`] is everything a single visitor owns: the cart, the search
//! query and the active view. It is plain data; the web layer keeps one per
//! visitor and applies each request's mutation to it in turn.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartError, CartSummary};
use crate::catalog::{Catalog, Product};
use crate::types::ProductId;
use crate::view::View;

/// State owned by one shopping session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopState {
    query: String,
    cart: Cart,
    view: View,
}

impl ShopState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Switch the active view.
    pub const fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Add one unit of a catalog product and return the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if `id` is not in `catalog`.
    pub fn add_to_cart(&mut self, catalog: &Catalog, id: ProductId) -> Result<u32, CartError> {
        if !catalog.contains(id) {
            return Err(CartError::UnknownProduct(id));
        }
        Ok(self.cart.increment(id))
    }

    /// Remove one unit and return what is left. Unknown or absent ids are a
    /// no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> u32 {
        self.cart.decrement(id)
    }

    /// Catalog products matching the current query.
    #[must_use]
    pub fn search_results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.search(&self.query)
    }

    /// Badge count shown in the header.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.total_count()
    }

    #[must_use]
    pub fn cart_summary<'a>(&self, catalog: &'a Catalog) -> CartSummary<'a> {
        self.cart.summary(catalog)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ShopState::new();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.query(), "");
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product_is_rejected() {
        let catalog = Catalog::sample();
        let mut state = ShopState::new();
        assert_eq!(
            state.add_to_cart(&catalog, ProductId::new(99)),
            Err(CartError::UnknownProduct(ProductId::new(99)))
        );
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut state = ShopState::new();
        assert_eq!(state.remove_from_cart(ProductId::new(99)), 0);
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_navigation_leaves_cart_and_query_alone() {
        let catalog = Catalog::sample();
        let mut state = ShopState::new();
        state.set_query("огур");
        state.add_to_cart(&catalog, ProductId::new(2)).unwrap();
        let before = state.clone();

        for view in View::ALL {
            state.navigate(view);
            assert_eq!(state.view(), view);
            assert_eq!(state.cart(), before.cart());
            assert_eq!(state.query(), before.query());
        }
    }

    #[test]
    fn test_search_results_follow_query() {
        let catalog = Catalog::sample();
        let mut state = ShopState::new();
        assert_eq!(state.search_results(&catalog).len(), 4);

        state.set_query("ОГУР");
        let names: Vec<&str> = state
            .search_results(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Огурцы", "Огурцы маринованные"]);
    }

    #[test]
    fn test_cart_count_and_summary() {
        let catalog = Catalog::sample();
        let mut state = ShopState::new();
        state.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        state.add_to_cart(&catalog, ProductId::new(1)).unwrap();
        state.add_to_cart(&catalog, ProductId::new(2)).unwrap();

        assert_eq!(state.cart_count(), 3);
        assert_eq!(state.cart_summary(&catalog).total().display(), "420 ₽");
    }

    #[test]
    fn test_state_survives_json() {
        let catalog = Catalog::sample();
        let mut state = ShopState::new();
        state.navigate(View::Cart);
        state.set_query("черри");
        state.add_to_cart(&catalog, ProductId::new(3)).unwrap();

        let value = serde_json::to_value(&state).unwrap();
        let restored: ShopState = serde_json::from_value(value).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_missing_fields_default() {
        let restored: ShopState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, ShopState::new());
    }
}

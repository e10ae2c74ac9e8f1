//! Product catalog and search.
//!
//! The catalog is a fixed, ordered list of products built once at startup.
//! It is never mutated afterwards; every derived view (search results, cart
//! lines) borrows from it and preserves its order.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Base URL of the product image CDN.
const IMAGE_CDN: &str =
    "https://cdn.poehali.dev/projects/9951cd26-7861-4663-8384-fc67dc910f5f/files";

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("product id must be positive, got {0}")]
    InvalidId(ProductId),
    #[error("product {0} must have a positive price")]
    InvalidPrice(ProductId),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in rubles per `unit`.
    pub price: Decimal,
    /// Unit of measure, e.g. "кг".
    pub unit: String,
    pub category: String,
    /// Image URI. Rendered as-is, never fetched here.
    pub image: String,
}

impl Product {
    /// Unit price as a display-ready [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::rubles(self.price)
    }

    /// Whether the product name contains `needle` ignoring case.
    ///
    /// `needle` must already be lowercased.
    fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// The fixed list of products on sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are positive and unique and that
    /// every price is positive.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] naming the first offending product.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.as_i32() <= 0 {
                return Err(CatalogError::InvalidId(product.id));
            }
            if product.price <= Decimal::ZERO {
                return Err(CatalogError::InvalidPrice(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The compiled-in storefront catalog.
    #[must_use]
    pub fn sample() -> Self {
        let tomato = format!("{IMAGE_CDN}/937c3fcf-91f7-496f-a539-44eb2394480d.jpg");
        let cucumber = format!("{IMAGE_CDN}/aca58f1b-1f7f-418d-81cc-8bbe4eaea116.jpg");
        let vegetable = |id: i32, name: &str, price: i32, image: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
            unit: "кг".to_string(),
            category: "Овощи".to_string(),
            image: image.to_string(),
        };

        Self {
            products: vec![
                vegetable(1, "Помидоры", 150, &tomato),
                vegetable(2, "Огурцы", 120, &cucumber),
                vegetable(3, "Помидоры черри", 220, &tomato),
                vegetable(4, "Огурцы маринованные", 180, &cucumber),
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether `id` names a product in this catalog.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Products whose name matches `query`. See [`filter`].
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        filter(&self.products, query)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

/// Keep the products whose name contains `query`, ignoring case and
/// surrounding whitespace. An empty query keeps everything. Order is
/// preserved.
pub fn filter<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.trim().to_lowercase();
    products
        .into_iter()
        .filter(|p| needle.is_empty() || p.name_contains(&needle))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::from(price),
            unit: "кг".to_string(),
            category: "Овощи".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_sample_catalog_has_four_products() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.get(ProductId::new(3)).unwrap().name,
            "Помидоры черри"
        );
        assert!(!catalog.contains(ProductId::new(5)));
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::sample();
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let catalog = Catalog::sample();
        assert_eq!(ids(&catalog.search("")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&catalog.search("   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::sample();
        assert_eq!(ids(&catalog.search(" огур")), vec![2, 4]);
        assert_eq!(ids(&catalog.search("ПОМИДОРЫ")), vec![1, 3]);
        assert_eq!(ids(&catalog.search("Черри")), vec![3]);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = Catalog::sample();
        assert!(catalog.search("капуста").is_empty());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![product(1, 10), product(1, 20)]);
        assert_eq!(result, Err(CatalogError::DuplicateId(ProductId::new(1))));
    }

    #[test]
    fn test_new_rejects_non_positive_id() {
        let result = Catalog::new(vec![product(0, 10)]);
        assert_eq!(result, Err(CatalogError::InvalidId(ProductId::new(0))));
    }

    #[test]
    fn test_new_rejects_non_positive_price() {
        let result = Catalog::new(vec![product(1, 0)]);
        assert_eq!(result, Err(CatalogError::InvalidPrice(ProductId::new(1))));
    }

    #[test]
    fn test_unit_price_display() {
        let catalog = Catalog::sample();
        let tomato = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(tomato.unit_price().per_unit(&tomato.unit), "150 ₽/кг");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every result contains the query and order is preserved.
            #[test]
            fn filter_matches_and_preserves_order(query in "[а-яА-Я ]{0,6}") {
                let catalog = Catalog::sample();
                let results = catalog.search(&query);
                let needle = query.trim().to_lowercase();

                for p in &results {
                    prop_assert!(p.name.to_lowercase().contains(&needle));
                }

                let positions: Vec<usize> = results
                    .iter()
                    .filter_map(|r| catalog.products().iter().position(|p| p.id == r.id))
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }

            /// Property: nothing that matches is dropped.
            #[test]
            fn filter_is_complete(query in "[а-яА-Я ]{0,6}") {
                let catalog = Catalog::sample();
                let needle = query.trim().to_lowercase();
                let expected = catalog
                    .products()
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .count();
                prop_assert_eq!(catalog.search(&query).len(), expected);
            }

            /// Property: filtering twice with the same query changes nothing.
            #[test]
            fn filter_is_idempotent(query in "\\PC{0,8}") {
                let catalog = Catalog::sample();
                let once = catalog.search(&query);
                let twice = filter(once.iter().copied(), &query);
                prop_assert_eq!(once, twice);
            }
        }
    }
}

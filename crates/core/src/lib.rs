//! TAKZY17 Core - catalog, cart and view state.
//!
//! This crate holds the storefront's domain logic:
//! - a fixed product [`Catalog`] with case-insensitive search
//! - a [`Cart`] of positive quantities with derived totals
//! - the [`View`] a shopper is looking at
//! - [`ShopState`], which bundles the mutable parts for one session
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! sessions. The storefront binary owns one `ShopState` per visitor and
//! renders it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Products and search
//! - [`cart`] - Quantities, lines and totals
//! - [`view`] - Storefront sections
//! - [`shop`] - Per-session state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod shop;
pub mod types;
pub mod view;

pub use cart::{Cart, CartError, CartLine, CartSummary};
pub use catalog::{Catalog, CatalogError, Product};
pub use shop::ShopState;
pub use types::*;
pub use view::View;

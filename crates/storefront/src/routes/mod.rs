//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /catalog?q=             - Catalog with search (query kept in session)
//! GET  /delivery               - Delivery and payment info
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit (redirects to active view)
//! POST /cart/remove            - Remove one unit (redirects to active view)
//! ```
//!
//! `/health` and `/static` are mounted in [`crate::app`].

pub mod cart;
pub mod catalog;
pub mod home;
pub mod pages;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/cart/add", post(cart::add))
        .route("/cart/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/catalog", get(catalog::index))
        .route("/delivery", get(pages::delivery))
        .merge(cart_routes())
        .fallback(pages::not_found)
}

//! Cart route handlers.
//!
//! Quantities live in the visitor's shop state. Add and remove are plain
//! form posts that redirect back to whichever view the visitor was on.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use takzy_core::{ProductId, View};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::ShopSession;
use crate::routes::views::{CartView, LayoutView};
use crate::state::AppState;

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartShowTemplate {
    pub layout: LayoutView,
    pub cart: CartView,
    pub catalog_href: &'static str,
}

/// Display cart page.
#[instrument(skip(state, shop))]
pub async fn show(State(state): State<AppState>, mut shop: ShopSession) -> CartShowTemplate {
    shop.visit(View::Cart);

    let summary = shop.state.cart_summary(state.catalog());
    let cart = CartView::new(&summary, &shop.state);

    CartShowTemplate {
        layout: LayoutView::new(&shop.state),
        cart,
        catalog_href: View::Catalog.path(),
    }
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns 404 if the product is not in the catalog.
#[instrument(skip(state, shop))]
pub async fn add(
    State(state): State<AppState>,
    mut shop: ShopSession,
    Form(form): Form<CartItemForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let quantity = shop
        .state
        .add_to_cart(state.catalog(), id)
        .inspect_err(|e| tracing::warn!("Rejected add to cart: {e}"))?;

    tracing::info!(product_id = %id, quantity, "Added to cart");
    let product_id = id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));

    Ok(Redirect::to(shop.state.view().path()))
}

/// Remove one unit of a product from the cart.
///
/// Removing something that is not in the cart is a no-op.
#[instrument(skip(shop))]
pub async fn remove(mut shop: ShopSession, Form(form): Form<CartItemForm>) -> Redirect {
    let id = ProductId::new(form.product_id);
    let remaining = shop.state.remove_from_cart(id);

    tracing::info!(product_id = %id, remaining, "Removed from cart");
    let product_id = id.to_string();
    add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", product_id.as_str())]));

    Redirect::to(shop.state.view().path())
}

//! Catalog route handlers.
//!
//! The search query is kept with the visitor's state, so leaving the catalog and
//! coming back shows the same results. Submitting an empty query clears it.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use takzy_core::View;
use tracing::instrument;

use crate::filters;
use crate::middleware::ShopSession;
use crate::routes::views::{LayoutView, ProductView};
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Search text. Absent means "keep the current query".
    pub q: Option<String>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub layout: LayoutView,
    pub query: String,
    pub products: Vec<ProductView>,
}

/// Display the catalog, filtered by the session's search query.
#[instrument(skip(state, shop))]
pub async fn index(
    State(state): State<AppState>,
    mut shop: ShopSession,
    Query(query): Query<CatalogQuery>,
) -> CatalogTemplate {
    if let Some(q) = query.q {
        shop.state.set_query(q);
    }
    shop.visit(View::Catalog);

    let products = ProductView::list(shop.state.search_results(state.catalog()), &shop.state);
    tracing::debug!(
        query = shop.state.query(),
        matches = products.len(),
        "Catalog search"
    );

    CatalogTemplate {
        layout: LayoutView::new(&shop.state),
        query: shop.state.query().to_string(),
        products,
    }
}

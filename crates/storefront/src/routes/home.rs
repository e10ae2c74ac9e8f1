//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use takzy_core::View;
use tracing::instrument;

use crate::filters;
use crate::middleware::ShopSession;
use crate::routes::views::{LayoutView, ProductView};
use crate::state::AppState;

// =============================================================================
// Hero Configuration (Static content)
// =============================================================================

/// Hero banner at the top of the home page.
#[derive(Clone)]
pub struct HeroView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

impl Default for HeroView {
    fn default() -> Self {
        Self {
            title: View::Home.title(),
            subtitle: "Качественные помидоры и огурцы с доставкой на дом",
            button_text: "Смотреть каталог",
            button_url: View::Catalog.path(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub hero: HeroView,
    /// Every product, unfiltered.
    pub products: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state, shop))]
pub async fn home(State(state): State<AppState>, mut shop: ShopSession) -> HomeTemplate {
    shop.visit(View::Home);

    HomeTemplate {
        layout: LayoutView::new(&shop.state),
        hero: HeroView::default(),
        products: ProductView::list(state.catalog().products(), &shop.state),
    }
}

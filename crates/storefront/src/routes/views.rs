//! Display data shared by the page templates.

use takzy_core::{CartSummary, Price, Product, ShopState, View};

/// Label used for the cart count when lines have different units.
const PIECES_LABEL: &str = "шт.";

/// Views listed in the header navigation, in order.
const NAV_VIEWS: [View; 3] = [View::Home, View::Catalog, View::Delivery];

/// Header navigation link.
#[derive(Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Data every page needs for the header and footer.
#[derive(Clone)]
pub struct LayoutView {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub cart_href: &'static str,
    pub cart_active: bool,
    pub cart_count: u64,
    pub delivery_href: &'static str,
}

impl LayoutView {
    #[must_use]
    pub fn new(state: &ShopState) -> Self {
        let active = state.view();
        Self {
            title: active.title(),
            nav: NAV_VIEWS
                .iter()
                .map(|view| NavLink {
                    label: view.label(),
                    href: view.path(),
                    active: *view == active,
                })
                .collect(),
            cart_href: View::Cart.path(),
            cart_active: active == View::Cart,
            cart_count: state.cart_count(),
            delivery_href: View::Delivery.path(),
        }
    }
}

/// Product card data.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub category: String,
    /// e.g. "150 ₽"
    pub price: String,
    /// e.g. "150 ₽/кг"
    pub price_per_unit: String,
    pub unit: String,
    pub image: String,
    /// Units already in the visitor's cart.
    pub in_cart: u32,
}

impl ProductView {
    #[must_use]
    pub fn new(product: &Product, state: &ShopState) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.unit_price().display(),
            price_per_unit: product.unit_price().per_unit(&product.unit),
            unit: product.unit.clone(),
            image: product.image.clone(),
            in_cart: state.cart().quantity(product.id),
        }
    }

    /// Build cards for `products`, keeping their order.
    #[must_use]
    pub fn list<'a>(products: impl IntoIterator<Item = &'a Product>, state: &ShopState) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| Self::new(product, state))
            .collect()
    }
}

/// One cart row.
#[derive(Clone)]
pub struct CartLineView {
    pub product: ProductView,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart page data.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// e.g. "1 020 ₽"
    pub total: String,
    /// e.g. "3 кг" or "3 шт."
    pub count_label: String,
}

impl CartView {
    #[must_use]
    pub fn new(summary: &CartSummary<'_>, state: &ShopState) -> Self {
        let lines = summary
            .lines
            .iter()
            .map(|line| CartLineView {
                product: ProductView::new(line.product, state),
                quantity: line.quantity,
                line_total: Price::rubles(line.line_total()).display(),
            })
            .collect();

        Self {
            lines,
            total: summary.total().display(),
            count_label: format!(
                "{} {}",
                summary.total_count,
                summary.count_unit.unwrap_or(PIECES_LABEL)
            ),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

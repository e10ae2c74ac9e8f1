//! Storefront sections a shopper can navigate between.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the mutually exclusive storefront sections.
///
/// Any view can be reached from any other. Switching views never touches
/// the cart or the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Catalog,
    Cart,
    Delivery,
}

impl View {
    pub const ALL: [Self; 4] = [Self::Home, Self::Catalog, Self::Cart, Self::Delivery];

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::Cart => "cart",
            Self::Delivery => "delivery",
        }
    }

    /// URL path that renders this view.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::Cart => "/cart",
            Self::Delivery => "/delivery",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::Cart => "Корзина",
            Self::Delivery => "Доставка",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Свежие овощи",
            Self::Catalog => "Каталог товаров",
            Self::Cart => "Корзина",
            Self::Delivery => "Доставка и оплата",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_paths_are_distinct() {
        let mut paths: Vec<&str> = View::ALL.iter().map(View::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), View::ALL.len());
    }

    #[test]
    fn test_display_is_slug() {
        for view in View::ALL {
            assert_eq!(view.to_string(), view.slug());
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        assert_eq!(
            serde_json::to_string(&View::Delivery).unwrap(),
            "\"delivery\""
        );
    }
}

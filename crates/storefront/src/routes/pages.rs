//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::Uri;
use takzy_core::View;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::ShopSession;
use crate::routes::views::LayoutView;

/// A card on the delivery and payment page.
#[derive(Clone)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    /// Checklist items. Empty when the card has prose instead.
    pub points: Vec<&'static str>,
    pub text: Option<&'static str>,
}

/// Cards shown on the delivery page, in order.
fn delivery_cards() -> Vec<InfoCard> {
    vec![
        InfoCard {
            icon: "🚚",
            title: "Доставка",
            points: vec![
                "Бесплатная доставка от 1000 ₽",
                "Доставка в день заказа",
                "Самовывоз с фермы",
            ],
            text: None,
        },
        InfoCard {
            icon: "💳",
            title: "Оплата",
            points: vec!["Картой онлайн", "При получении", "Безопасная оплата"],
            text: None,
        },
        InfoCard {
            icon: "🌿",
            title: "Качество",
            points: Vec::new(),
            text: Some(
                "Свежие овощи с фермы. Собираем урожай в день отправки. Гарантия качества и свежести продукции.",
            ),
        },
        InfoCard {
            icon: "🛡",
            title: "Гарантия свежести",
            points: Vec::new(),
            text: Some(
                "Если продукт не соответствует вашим ожиданиям, мы вернём деньги или заменим товар.",
            ),
        },
    ]
}

/// Delivery and payment page template.
#[derive(Template, WebTemplate)]
#[template(path = "delivery.html")]
pub struct DeliveryTemplate {
    pub layout: LayoutView,
    pub cards: Vec<InfoCard>,
}

/// Display the delivery and payment page.
#[instrument(skip(shop))]
pub async fn delivery(mut shop: ShopSession) -> DeliveryTemplate {
    shop.visit(View::Delivery);

    DeliveryTemplate {
        layout: LayoutView::new(&shop.state),
        cards: delivery_cards(),
    }
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_cards_have_content() {
        let cards = delivery_cards();
        assert_eq!(cards.len(), 4);
        assert!(
            cards
                .iter()
                .all(|card| !card.points.is_empty() || card.text.is_some())
        );
    }
}

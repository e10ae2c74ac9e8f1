//! Shopper state extractor.
//!
//! Resolves the visitor id stored in the session (issuing one on the first
//! visit) and locks that visitor's [`ShopState`] in the [`ShopStore`]. The
//! lock lives as long as the extractor, so each handler sees and mutates
//! the state without interleaving with other requests from the same
//! visitor.
//!
//! [`ShopStore`]: crate::shop_store::ShopStore

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use takzy_core::{ShopState, View};
use tokio::sync::OwnedMutexGuard;
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::session_keys;
use crate::state::AppState;

/// The current visitor's storefront state, locked for this request.
///
/// Changes made through `state` are visible to the visitor's next request
/// as soon as the handler returns.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut shop: ShopSession) -> String {
///     shop.visit(View::Cart);
///     format!("{} items", shop.state.cart_count())
/// }
/// ```
pub struct ShopSession {
    pub state: OwnedMutexGuard<ShopState>,
}

impl ShopSession {
    /// Switch the visitor to `view`.
    pub fn visit(&mut self, view: View) {
        self.state.navigate(view);
    }
}

/// Read the visitor id from the session, issuing a new one if absent.
async fn visitor_id(session: &Session) -> Result<Uuid, AppError> {
    if let Some(id) = session.get::<Uuid>(session_keys::VISITOR_ID).await? {
        return Ok(id);
    }

    let id = Uuid::new_v4();
    session.insert(session_keys::VISITOR_ID, id).await?;
    tracing::debug!(visitor_id = %id, "New visitor");
    Ok(id)
}

impl<S> FromRequestParts<S> for ShopSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let visitor = visitor_id(&session)
            .await
            .map_err(IntoResponse::into_response)?;

        let app = AppState::from_ref(state);
        Ok(Self {
            state: app.shops().lock(visitor).await,
        })
    }
}

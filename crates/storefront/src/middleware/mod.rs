//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with an empty `request_id` field)
//! 3. Request ID (fills `request_id` and echoes it in the response)
//! 4. Security headers (CSP, frame and referrer policies)
//! 5. Session layer (tower-sessions with an in-memory store)
//!
//! Handlers read per-visitor state through the [`ShopSession`] extractor,
//! which locks the visitor's entry in the shop store for the request.

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod shop_session;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use shop_session::ShopSession;

//! Domain models for storefront.
//!
//! The catalog, cart and view types live in `takzy_core`; this module only
//! holds what the web layer adds on top, namely session keys.

pub mod session;

pub use session::keys as session_keys;

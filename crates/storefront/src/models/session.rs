//! Session-related types.

/// Session keys for shopper data.
pub mod keys {
    /// Key for the visitor id (`uuid::Uuid`) that selects the visitor's
    /// entry in `ShopStore`.
    pub const VISITOR_ID: &str = "visitor_id";
}

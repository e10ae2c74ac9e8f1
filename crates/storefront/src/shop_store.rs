//! Server-side store of per-visitor shop state.
//!
//! The session cookie only carries a visitor id. Each visitor's
//! [`ShopState`] lives here behind its own async mutex, so requests from
//! the same visitor are applied one at a time while different visitors
//! never wait on each other.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use takzy_core::ShopState;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::middleware::session::SESSION_EXPIRY_SECONDS;

/// Upper bound on visitors kept in memory.
const MAX_VISITORS: u64 = 100_000;

/// Per-visitor [`ShopState`], keyed by the visitor id stored in the session.
///
/// Cheap to clone; clones share the same entries.
#[derive(Clone)]
pub struct ShopStore {
    visitors: Cache<Uuid, Arc<Mutex<ShopState>>>,
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopStore {
    /// Create an empty store whose entries expire with the session.
    #[must_use]
    pub fn new() -> Self {
        let visitors = Cache::builder()
            .max_capacity(MAX_VISITORS)
            .time_to_idle(Duration::from_secs(SESSION_EXPIRY_SECONDS.unsigned_abs()))
            .build();
        Self { visitors }
    }

    /// Lock `visitor`'s state, creating a fresh one on first use.
    ///
    /// The guard must be held for the whole read-modify-write; a second
    /// caller for the same visitor waits until it is dropped.
    pub async fn lock(&self, visitor: Uuid) -> OwnedMutexGuard<ShopState> {
        let entry = self
            .visitors
            .get_with(visitor, async { Arc::new(Mutex::new(ShopState::new())) })
            .await;
        entry.lock_owned().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use takzy_core::{Catalog, ProductId, View};
    use tokio::task::JoinSet;

    use super::*;

    #[tokio::test]
    async fn test_new_visitor_starts_empty() {
        let store = ShopStore::new();
        let state = store.lock(Uuid::new_v4()).await;

        assert_eq!(state.view(), View::Home);
        assert!(state.cart().is_empty());
        assert_eq!(state.query(), "");
    }

    #[tokio::test]
    async fn test_state_persists_between_locks() {
        let store = ShopStore::new();
        let visitor = Uuid::new_v4();

        {
            let mut state = store.lock(visitor).await;
            state.navigate(View::Delivery);
            state.set_query("огур");
        }

        let state = store.lock(visitor).await;
        assert_eq!(state.view(), View::Delivery);
        assert_eq!(state.query(), "огур");
    }

    #[tokio::test]
    async fn test_visitors_are_isolated() {
        let store = ShopStore::new();
        let catalog = Catalog::sample();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .lock(alice)
            .await
            .add_to_cart(&catalog, ProductId::new(1))
            .unwrap();

        assert_eq!(store.lock(bob).await.cart_count(), 0);
        assert_eq!(store.lock(alice).await.cart_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_are_serialized() {
        let store = ShopStore::new();
        let catalog = Arc::new(Catalog::sample());
        let visitor = Uuid::new_v4();

        let mut tasks = JoinSet::new();
        for _ in 0..32 {
            let store = store.clone();
            let catalog = Arc::clone(&catalog);
            tasks.spawn(async move {
                let mut state = store.lock(visitor).await;
                let before = state.cart().quantity(ProductId::new(2));
                tokio::task::yield_now().await;
                let after = state.add_to_cart(&catalog, ProductId::new(2)).unwrap();
                assert_eq!(after, before + 1);
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        let state = store.lock(visitor).await;
        assert_eq!(state.cart().quantity(ProductId::new(2)), 32);
    }
}

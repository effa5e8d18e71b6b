//! Per-evaluation caching wrapper (spec §4.3): memoizes the full
//! interaction list per contract between calls within one `readState`
//! root, and incrementally extends when a later call asks for a
//! `to_sort_key` beyond what has already been fetched.

use crate::error::LoaderResult;
use crate::interaction_loader::{InteractionLoader, LoadOptions};
use async_trait::async_trait;
use foldrunner_core::{Interaction, SortKey};
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct ContractCache {
    /// Ascending by sort-key, starting from genesis.
    interactions: Vec<Interaction>,
    /// The sort-key up through which `interactions` is known complete.
    /// `None` means nothing has been fetched yet.
    loaded_to: Option<SortKey>,
}

/// Wraps any [`InteractionLoader`] with the per-root memoization described
/// above. One instance is scoped to a single `readState` call; it is not
/// meant to outlive it (the spec explicitly scopes this cache "between
/// calls in one evaluation", not across evaluations — long-lived caching
/// of interaction lists lives in the sort-key cache, not here).
pub struct CachingInteractionLoader<L> {
    inner: L,
    // A single mutex serializes fetches across *all* contracts touched by
    // this evaluation, not just same-contract ones. That's a deliberate
    // simplification: this wrapper's lifetime is one root `readState`, so
    // the contention window is small, and it keeps the incremental-extend
    // bookkeeping race-free without per-contract lock plumbing.
    state: Mutex<HashMap<String, ContractCache>>,
}

impl<L: InteractionLoader> CachingInteractionLoader<L> {
    pub fn new(inner: L) -> Self {
        Self { inner, state: Mutex::new(HashMap::new()) }
    }
}

#[async_trait]
impl<L: InteractionLoader> InteractionLoader for CachingInteractionLoader<L> {
    async fn load(
        &self,
        contract: &str,
        from_sort_key: Option<&SortKey>,
        to_sort_key: Option<&SortKey>,
        opts: &LoadOptions,
    ) -> LoaderResult<Vec<Interaction>> {
        let mut state = self.state.lock().await;
        let cache = state.entry(contract.to_string()).or_default();

        let needs_fetch = match (&cache.loaded_to, to_sort_key) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(loaded), Some(to)) => to > loaded,
        };

        if needs_fetch {
            let fetch_from = cache.loaded_to.clone();
            let fetched = self.inner.load(contract, fetch_from.as_ref(), to_sort_key, opts).await?;
            let new_loaded_to = fetched
                .last()
                .and_then(|i| i.sort_key.clone())
                .or(to_sort_key.cloned())
                .or(cache.loaded_to.clone());
            cache.interactions.extend(fetched);
            cache.loaded_to = new_loaded_to;
        }

        Ok(cache
            .interactions
            .iter()
            .filter(|i| {
                let key = i.sort_key.as_ref();
                let after_from = from_sort_key.zip(key).map_or(true, |(f, k)| k > f);
                let through_to = to_sort_key.zip(key).map_or(true, |(t, k)| k <= t);
                after_from && through_to
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldrunner_core::interaction::BlockInfo;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        items: Vec<Interaction>,
    }

    #[async_trait]
    impl InteractionLoader for CountingLoader {
        async fn load(
            &self,
            _contract: &str,
            from: Option<&SortKey>,
            to: Option<&SortKey>,
            _opts: &LoadOptions,
        ) -> LoaderResult<Vec<Interaction>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .items
                .iter()
                .filter(|i| {
                    let key = i.sort_key.as_ref().unwrap();
                    from.map_or(true, |f| key > f) && to.map_or(true, |t| key <= t)
                })
                .cloned()
                .collect())
        }
    }

    fn interaction(n: u64) -> Interaction {
        Interaction {
            id: format!("i{n}"),
            sort_key: Some(SortKey::new(n, n * 1000, "h")),
            block: BlockInfo { height: n, id: format!("b{n}"), timestamp: n * 1000 },
            owner_address: "owner".into(),
            tags: vec![],
            confirmation_status: None,
            dry: false,
            vrf: None,
        }
    }

    #[tokio::test]
    async fn repeated_calls_with_same_to_hit_cache_without_refetching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = CountingLoader { calls: calls.clone(), items: vec![interaction(1), interaction(2)] };
        let loader = CachingInteractionLoader::new(inner);
        let to = SortKey::new(2, 2000, "h");

        let first = loader.load("c1", None, Some(&to), &LoadOptions::default()).await.unwrap();
        let second = loader.load("c1", None, Some(&to), &LoadOptions::default()).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "second call must be served from cache");
    }

    #[tokio::test]
    async fn extending_to_triggers_incremental_fetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = CountingLoader {
            calls: calls.clone(),
            items: vec![interaction(1), interaction(2), interaction(3)],
        };
        let loader = CachingInteractionLoader::new(inner);
        let to1 = SortKey::new(1, 1000, "h");
        let to2 = SortKey::new(3, 3000, "h");

        let first = loader.load("c1", None, Some(&to1), &LoadOptions::default()).await.unwrap();
        assert_eq!(first.len(), 1);

        let second = loader.load("c1", None, Some(&to2), &LoadOptions::default()).await.unwrap();
        assert_eq!(second.len(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2, "extending `to` must trigger one incremental fetch");
    }
}

//! Interaction-state scratchpad (spec §4.8): a per-root-call transactional
//! map `(contract_tx_id, sort_key) -> EvalStateResult<S>` sitting in front
//! of the persistent [`SortKeyCache`]. Grounded on the teacher's
//! `neo-persistence::cache` write-batch-then-commit pattern, generalized
//! from byte buffers to typed fold snapshots.

use foldrunner_cache::SortKeyCache;
use foldrunner_core::{EvalStateResult, FoldResult, Interaction, SortKey};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

struct Staged<S> {
    result: EvalStateResult<S>,
    cacheable: bool,
}

/// Transactional staging area shared by every contract touched within one
/// root `readState` call, including contracts reached only via internal
/// writes (spec §4.8 invariant: "the child sees the parent's staged
/// updates for *any* contract").
pub struct InteractionState<S, C> {
    base_cache: Arc<C>,
    staged: Mutex<std::collections::HashMap<String, BTreeMap<SortKey, Staged<S>>>>,
}

impl<S, C> InteractionState<S, C>
where
    S: Clone + Send + Sync,
    C: SortKeyCache<EvalStateResult<S>>,
{
    pub fn new(base_cache: Arc<C>) -> Self {
        Self { base_cache, staged: Mutex::new(std::collections::HashMap::new()) }
    }

    /// Seeds the scratchpad with the pre-fold baseline for `contract` so
    /// that `get` has something to fall back to before the first `update`.
    pub async fn set_initial(&self, contract: &str, result: EvalStateResult<S>, sort_key: SortKey) {
        let mut staged = self.staged.lock().await;
        staged
            .entry(contract.to_string())
            .or_default()
            .insert(sort_key, Staged { result, cacheable: false });
    }

    /// Overwrites (or inserts) the scratchpad entry for `contract` at
    /// `sort_key`. `cacheable` mirrors the interaction's own cacheability
    /// gate (spec §4.7 step 8).
    pub async fn update(&self, contract: &str, result: EvalStateResult<S>, sort_key: SortKey, cacheable: bool) {
        let mut staged = self.staged.lock().await;
        staged
            .entry(contract.to_string())
            .or_default()
            .insert(sort_key, Staged { result, cacheable });
    }

    /// Reads the scratchpad first (greatest staged key `<= sort_key`),
    /// falling back to the persistent cache. Returns the key the value was
    /// found at alongside the value, since callers need it to compute
    /// `missing = interactions in (base, requested]`.
    pub async fn get(&self, contract: &str, sort_key: &SortKey) -> FoldResult<Option<(SortKey, EvalStateResult<S>)>> {
        {
            let staged = self.staged.lock().await;
            if let Some(tree) = staged.get(contract) {
                if let Some((key, entry)) = tree.range(..=sort_key.clone()).next_back() {
                    return Ok(Some((key.clone(), entry.result.clone())));
                }
            }
        }
        self.base_cache.get_less_or_equal(contract, sort_key).await.map_err(Into::into)
    }

    /// Flushes every staged entry for `contract` with sort-key `<=
    /// interaction.sort_key` into the persistent cache, subject to the
    /// cacheability gate unless `force` is set.
    pub async fn commit(&self, contract: &str, interaction: &Interaction, force: bool) -> FoldResult<()> {
        let Some(boundary) = interaction.sort_key.clone() else { return Ok(()) };
        let to_flush: Vec<(SortKey, EvalStateResult<S>)> = {
            let mut staged = self.staged.lock().await;
            let Some(tree) = staged.get_mut(contract) else { return Ok(()) };
            let keys: Vec<SortKey> = tree.range(..=boundary.clone()).map(|(k, _)| k.clone()).collect();
            let mut out = Vec::new();
            for key in keys {
                if let Some(entry) = tree.remove(&key) {
                    if force || entry.cacheable {
                        out.push((key, entry.result));
                    }
                }
            }
            out
        };
        for (key, result) in to_flush {
            self.base_cache.put(contract, key, result).await?;
        }
        Ok(())
    }

    /// Discards staged entries for `contract` at or after
    /// `interaction.sort_key`, restoring the pre-interaction view.
    pub async fn rollback(&self, contract: &str, interaction: &Interaction, force: bool) {
        let _ = force;
        let Some(boundary) = interaction.sort_key.clone() else { return };
        let mut staged = self.staged.lock().await;
        if let Some(tree) = staged.get_mut(contract) {
            tree.retain(|k, _| *k < boundary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldrunner_cache::MemorySortKeyCache;
    use foldrunner_core::interaction::BlockInfo;
    use serde_json::{json, Value};

    fn interaction_at(height: u64) -> Interaction {
        Interaction {
            id: format!("i{height}"),
            sort_key: Some(SortKey::new(height, height * 1000, "h")),
            block: BlockInfo { height, id: format!("b{height}"), timestamp: height * 1000 },
            owner_address: "owner".into(),
            tags: vec![],
            confirmation_status: None,
            dry: false,
            vrf: None,
        }
    }

    #[tokio::test]
    async fn get_prefers_scratchpad_over_base_cache() {
        let base = Arc::new(MemorySortKeyCache::<EvalStateResult<Value>>::new());
        base.put("c1", SortKey::new(1, 1000, "h"), EvalStateResult::new(json!({"v": 1}))).await.unwrap();
        let state = InteractionState::new(base);

        state
            .update("c1", EvalStateResult::new(json!({"v": 2})), SortKey::new(1, 1000, "h"), false)
            .await;

        let (_, result) = state.get("c1", &SortKey::new(1, 1000, "h")).await.unwrap().unwrap();
        assert_eq!(result.state, json!({"v": 2}));
    }

    #[tokio::test]
    async fn commit_only_flushes_cacheable_entries_unless_forced() {
        let base = Arc::new(MemorySortKeyCache::<EvalStateResult<Value>>::new());
        let state = InteractionState::new(base.clone());

        state.update("c1", EvalStateResult::new(json!({"v": 1})), SortKey::new(1, 1000, "h"), true).await;
        state.update("c1", EvalStateResult::new(json!({"v": 2})), SortKey::new(2, 2000, "h"), false).await;

        state.commit("c1", &interaction_at(2), false).await.unwrap();

        assert!(base.get("c1", &SortKey::new(1, 1000, "h")).await.unwrap().is_some());
        assert!(base.get("c1", &SortKey::new(2, 2000, "h")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rollback_discards_entries_at_or_after_interaction() {
        let base = Arc::new(MemorySortKeyCache::<EvalStateResult<Value>>::new());
        let state = InteractionState::new(base);

        state.update("c1", EvalStateResult::new(json!({"v": 1})), SortKey::new(1, 1000, "h"), true).await;
        state.update("c1", EvalStateResult::new(json!({"v": 2})), SortKey::new(2, 2000, "h"), true).await;

        state.rollback("c1", &interaction_at(2), false).await;

        let (_, result) = state.get("c1", &SortKey::new(2, 2000, "h")).await.unwrap().unwrap();
        assert_eq!(result.state, json!({"v": 1}), "entry at/after the rolled-back interaction is gone");
    }
}

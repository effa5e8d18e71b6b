//! In-memory `SortKeyCache`, grounded on `neo-persistence::cache::LruCache`'s
//! explicit-locking style but specialized to ordered range lookups: each
//! contract gets its own `BTreeMap<SortKey, V>` behind a `parking_lot`
//! lock, and `DashMap` shards across contracts so unrelated contracts never
//! contend (spec §4.2: cross-contract ops need not be linearizable).

use crate::stats::{CacheCounters, CacheStats};
use crate::{CacheResult, SortKeyCache};
use async_trait::async_trait;
use dashmap::DashMap;
use foldrunner_core::SortKey;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

type ContractMap<V> = Arc<RwLock<BTreeMap<SortKey, V>>>;

/// In-memory `SortKeyCache`. Used for `viewState`/`dryWrite` scratch
/// evaluation and in tests; has the same read/write semantics as
/// [`crate::rocks::RocksDbSortKeyCache`] so tests against it exercise real
/// evaluator behavior.
#[derive(Default)]
pub struct MemorySortKeyCache<V> {
    contracts: DashMap<String, ContractMap<V>>,
    counters: CacheCounters,
}

impl<V> MemorySortKeyCache<V> {
    pub fn new() -> Self {
        Self { contracts: DashMap::new(), counters: CacheCounters::default() }
    }

    fn contract_map(&self, contract: &str) -> ContractMap<V> {
        self.contracts
            .entry(contract.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(BTreeMap::new())))
            .clone()
    }
}

#[async_trait]
impl<V> SortKeyCache<V> for MemorySortKeyCache<V>
where
    V: Clone + Send + Sync,
{
    async fn get(&self, contract: &str, sort_key: &SortKey) -> CacheResult<Option<(SortKey, V)>> {
        let map = self.contract_map(contract);
        let guard = map.read();
        let found = guard.get(sort_key).map(|v| (sort_key.clone(), v.clone()));
        if found.is_some() {
            self.counters.record_hit();
        } else {
            self.counters.record_miss();
        }
        Ok(found)
    }

    async fn get_last(&self, contract: &str) -> CacheResult<Option<(SortKey, V)>> {
        let map = self.contract_map(contract);
        let guard = map.read();
        let found = guard.iter().next_back().map(|(k, v)| (k.clone(), v.clone()));
        if found.is_some() {
            self.counters.record_hit();
        } else {
            self.counters.record_miss();
        }
        Ok(found)
    }

    async fn get_less_or_equal(&self, contract: &str, sort_key: &SortKey) -> CacheResult<Option<(SortKey, V)>> {
        let map = self.contract_map(contract);
        let guard = map.read();
        // Atomic w.r.t. concurrent puts to this contract: the whole scan
        // happens under one read-lock acquisition.
        let found = guard
            .range(..=sort_key.clone())
            .next_back()
            .map(|(k, v)| (k.clone(), v.clone()));
        if found.is_some() {
            self.counters.record_hit();
        } else {
            self.counters.record_miss();
        }
        Ok(found)
    }

    async fn put(&self, contract: &str, sort_key: SortKey, value: V) -> CacheResult<()> {
        let map = self.contract_map(contract);
        map.write().insert(sort_key, value);
        self.counters.record_put();
        Ok(())
    }

    async fn delete(&self, contract: &str) -> CacheResult<()> {
        self.contracts.remove(contract);
        Ok(())
    }

    async fn keys(&self, contract: &str) -> CacheResult<Vec<SortKey>> {
        let map = self.contract_map(contract);
        Ok(map.read().keys().cloned().collect())
    }

    async fn all_contracts(&self) -> CacheResult<Vec<String>> {
        Ok(self.contracts.iter().map(|e| e.key().clone()).collect())
    }

    async fn dump(&self) -> CacheResult<Vec<(String, SortKey, V)>> {
        let mut out = Vec::new();
        for entry in self.contracts.iter() {
            let contract = entry.key().clone();
            for (k, v) in entry.value().read().iter() {
                out.push((contract.clone(), k.clone(), v.clone()));
            }
        }
        Ok(out)
    }

    async fn prune(&self, n: usize) -> CacheResult<()> {
        for entry in self.contracts.iter() {
            let mut guard = entry.value().write();
            if guard.len() <= n {
                continue;
            }
            let drop_count = guard.len() - n;
            let keys_to_drop: Vec<SortKey> = guard.keys().take(drop_count).cloned().collect();
            for k in &keys_to_drop {
                guard.remove(k);
            }
            self.counters.record_eviction(drop_count as u64);
        }
        Ok(())
    }

    fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sk(n: u64) -> SortKey {
        SortKey::new(n, n * 1000, "hash")
    }

    #[tokio::test]
    async fn exact_last_and_less_or_equal_lookups() {
        let cache: MemorySortKeyCache<i32> = MemorySortKeyCache::new();
        cache.put("c1", sk(1), 10).await.unwrap();
        cache.put("c1", sk(3), 30).await.unwrap();
        cache.put("c1", sk(5), 50).await.unwrap();

        assert_eq!(cache.get("c1", &sk(3)).await.unwrap(), Some((sk(3), 30)));
        assert_eq!(cache.get("c1", &sk(4)).await.unwrap(), None);
        assert_eq!(cache.get_last("c1").await.unwrap(), Some((sk(5), 50)));
        assert_eq!(cache.get_less_or_equal("c1", &sk(4)).await.unwrap(), Some((sk(3), 30)));
        assert_eq!(cache.get_less_or_equal("c1", &sk(0)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_existing_entry() {
        let cache: MemorySortKeyCache<i32> = MemorySortKeyCache::new();
        cache.put("c1", sk(1), 10).await.unwrap();
        cache.put("c1", sk(1), 20).await.unwrap();
        assert_eq!(cache.get("c1", &sk(1)).await.unwrap(), Some((sk(1), 20)));
    }

    #[tokio::test]
    async fn cross_contract_isolation() {
        let cache: MemorySortKeyCache<i32> = MemorySortKeyCache::new();
        cache.put("c1", sk(1), 10).await.unwrap();
        cache.put("c2", sk(1), 99).await.unwrap();
        assert_eq!(cache.get("c1", &sk(1)).await.unwrap(), Some((sk(1), 10)));
        assert_eq!(cache.get("c2", &sk(1)).await.unwrap(), Some((sk(1), 99)));
        let mut contracts = cache.all_contracts().await.unwrap();
        contracts.sort();
        assert_eq!(contracts, vec!["c1".to_string(), "c2".to_string()]);
    }

    #[tokio::test]
    async fn prune_retains_n_most_recent_by_sort_key() {
        let cache: MemorySortKeyCache<i32> = MemorySortKeyCache::new();
        for i in 1..=5u64 {
            cache.put("c1", sk(i), i as i32 * 10).await.unwrap();
        }
        cache.prune(2).await.unwrap();
        let keys = cache.keys("c1").await.unwrap();
        assert_eq!(keys, vec![sk(4), sk(5)]);
    }

    #[tokio::test]
    async fn stats_track_hits_and_misses() {
        let cache: MemorySortKeyCache<i32> = MemorySortKeyCache::new();
        cache.put("c1", sk(1), 10).await.unwrap();
        let _ = cache.get("c1", &sk(1)).await.unwrap();
        let _ = cache.get("c1", &sk(2)).await.unwrap();
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.puts, 1);
    }
}

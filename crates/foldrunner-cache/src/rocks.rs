//! Persistent `SortKeyCache` backed by RocksDB, grounded on
//! `neo-persistence`'s RocksDB store and the `!C!<sort_key>` namespacing
//! scheme from spec §6 "Persisted state layout": the outer `!...!`
//! delimiters let us range-scan a single contract's keys lexicographically
//! without touching any other contract's entries.

use crate::stats::{CacheCounters, CacheStats};
use crate::{CacheError, CacheResult, SortKeyCache};
use async_trait::async_trait;
use foldrunner_core::SortKey;
use rocksdb::{Direction, IteratorMode, Options, DB};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Mutex;

/// Persistent, RocksDB-backed `SortKeyCache`. `V` round-trips through JSON;
/// callers needing a binary-tight encoding can wrap `V` in a newtype with a
/// custom `Serialize` impl.
pub struct RocksDbSortKeyCache<V> {
    // RocksDB handles internal synchronization for reads and writes, but a
    // `get_less_or_equal` scan must not race a concurrent `put` to the same
    // key range (spec §4.2), so writes are serialized through this mutex;
    // reads take a RocksDB snapshot implicitly via the iterator and are
    // unaffected.
    db: Mutex<DB>,
    counters: CacheCounters,
    _marker: PhantomData<V>,
}

const PREFIX_DELIM: u8 = b'!';

fn contract_prefix(contract: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(contract.len() + 2);
    key.push(PREFIX_DELIM);
    key.extend_from_slice(contract.as_bytes());
    key.push(PREFIX_DELIM);
    key
}

fn encode_key(contract: &str, sort_key: &SortKey) -> Vec<u8> {
    let mut key = contract_prefix(contract);
    key.extend_from_slice(sort_key.as_str().as_bytes());
    key
}

fn decode_key(key: &[u8]) -> Option<(String, SortKey)> {
    if key.first() != Some(&PREFIX_DELIM) {
        return None;
    }
    let rest = &key[1..];
    let sep = rest.iter().position(|b| *b == PREFIX_DELIM)?;
    let contract = String::from_utf8(rest[..sep].to_vec()).ok()?;
    let sort_key_str = String::from_utf8(rest[sep + 1..].to_vec()).ok()?;
    Some((contract, SortKey::from_raw(sort_key_str)))
}

impl<V> RocksDbSortKeyCache<V>
where
    V: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn open(path: impl AsRef<Path>) -> CacheResult<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        Ok(Self { db: Mutex::new(db), counters: CacheCounters::default(), _marker: PhantomData })
    }

    fn decode_value(bytes: &[u8]) -> CacheResult<V> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[async_trait]
impl<V> SortKeyCache<V> for RocksDbSortKeyCache<V>
where
    V: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn get(&self, contract: &str, sort_key: &SortKey) -> CacheResult<Option<(SortKey, V)>> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let key = encode_key(contract, sort_key);
        match db.get(&key).map_err(CacheError::from)? {
            Some(bytes) => {
                self.counters.record_hit();
                Ok(Some((sort_key.clone(), Self::decode_value(&bytes)?)))
            }
            None => {
                self.counters.record_miss();
                Ok(None)
            }
        }
    }

    async fn get_last(&self, contract: &str) -> CacheResult<Option<(SortKey, V)>> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let prefix = contract_prefix(contract);
        let mut upper = prefix.clone();
        upper.push(0xff);
        let iter = db.iterator(IteratorMode::From(&upper, Direction::Reverse));
        for item in iter {
            let (k, v) = item.map_err(CacheError::from)?;
            if !k.starts_with(&prefix[..]) {
                break;
            }
            if let Some((_, sk)) = decode_key(&k) {
                self.counters.record_hit();
                return Ok(Some((sk, Self::decode_value(&v)?)));
            }
        }
        self.counters.record_miss();
        Ok(None)
    }

    async fn get_less_or_equal(&self, contract: &str, sort_key: &SortKey) -> CacheResult<Option<(SortKey, V)>> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let prefix = contract_prefix(contract);
        let target = encode_key(contract, sort_key);
        let iter = db.iterator(IteratorMode::From(&target, Direction::Reverse));
        for item in iter {
            let (k, v) = item.map_err(CacheError::from)?;
            if !k.starts_with(&prefix[..]) {
                break;
            }
            if let Some((_, sk)) = decode_key(&k) {
                self.counters.record_hit();
                return Ok(Some((sk, Self::decode_value(&v)?)));
            }
        }
        self.counters.record_miss();
        Ok(None)
    }

    async fn put(&self, contract: &str, sort_key: SortKey, value: V) -> CacheResult<()> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let key = encode_key(contract, &sort_key);
        let bytes = serde_json::to_vec(&value)?;
        db.put(&key, &bytes).map_err(CacheError::from)?;
        self.counters.record_put();
        Ok(())
    }

    async fn delete(&self, contract: &str) -> CacheResult<()> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let prefix = contract_prefix(contract);
        let iter = db.prefix_iterator(&prefix);
        let keys: Vec<Vec<u8>> = iter
            .filter_map(|item| item.ok())
            .map(|(k, _)| k.to_vec())
            .take_while(|k| k.starts_with(&prefix[..]))
            .collect();
        for k in keys {
            db.delete(&k).map_err(CacheError::from)?;
        }
        Ok(())
    }

    async fn keys(&self, contract: &str) -> CacheResult<Vec<SortKey>> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let prefix = contract_prefix(contract);
        let iter = db.prefix_iterator(&prefix);
        let mut out = Vec::new();
        for item in iter {
            let (k, _) = item.map_err(CacheError::from)?;
            if !k.starts_with(&prefix[..]) {
                break;
            }
            if let Some((_, sk)) = decode_key(&k) {
                out.push(sk);
            }
        }
        Ok(out)
    }

    async fn all_contracts(&self) -> CacheResult<Vec<String>> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let mut out = Vec::new();
        for item in db.iterator(IteratorMode::Start) {
            let (k, _) = item.map_err(CacheError::from)?;
            if let Some((contract, _)) = decode_key(&k) {
                if out.last() != Some(&contract) && !out.contains(&contract) {
                    out.push(contract);
                }
            }
        }
        Ok(out)
    }

    async fn dump(&self) -> CacheResult<Vec<(String, SortKey, V)>> {
        let db = self.db.lock().expect("rocksdb mutex poisoned");
        let mut out = Vec::new();
        for item in db.iterator(IteratorMode::Start) {
            let (k, v) = item.map_err(CacheError::from)?;
            if let Some((contract, sk)) = decode_key(&k) {
                out.push((contract, sk, Self::decode_value(&v)?));
            }
        }
        Ok(out)
    }

    async fn prune(&self, n: usize) -> CacheResult<()> {
        let contracts = self.all_contracts().await?;
        for contract in contracts {
            let keys = self.keys(&contract).await?;
            if keys.len() <= n {
                continue;
            }
            let db = self.db.lock().expect("rocksdb mutex poisoned");
            let drop_count = keys.len() - n;
            for sk in &keys[..drop_count] {
                let key = encode_key(&contract, sk);
                db.delete(&key).map_err(CacheError::from)?;
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

    fn open_tmp() -> (tempfile::TempDir, RocksDbSortKeyCache<i32>) {
        let dir = tempfile::tempdir().unwrap();
        let cache = RocksDbSortKeyCache::open(dir.path()).unwrap();
        (dir, cache)
    }

    #[tokio::test]
    async fn exact_and_range_lookups_round_trip_through_disk() {
        let (_dir, cache) = open_tmp();
        cache.put("c1", sk(1), 10).await.unwrap();
        cache.put("c1", sk(3), 30).await.unwrap();

        assert_eq!(cache.get("c1", &sk(1)).await.unwrap(), Some((sk(1), 10)));
        assert_eq!(cache.get_last("c1").await.unwrap(), Some((sk(3), 30)));
        assert_eq!(cache.get_less_or_equal("c1", &sk(2)).await.unwrap(), Some((sk(1), 10)));
        assert_eq!(cache.get_less_or_equal("c1", &sk(0)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn cross_contract_namespacing_does_not_leak() {
        let (_dir, cache) = open_tmp();
        cache.put("alpha", sk(5), 1).await.unwrap();
        cache.put("beta", sk(1), 2).await.unwrap();
        assert_eq!(cache.get_last("alpha").await.unwrap(), Some((sk(5), 1)));
        assert_eq!(cache.get_less_or_equal("beta", &sk(5)).await.unwrap(), Some((sk(1), 2)));
        let keys_alpha = cache.keys("alpha").await.unwrap();
        assert_eq!(keys_alpha, vec![sk(5)]);
    }

    #[tokio::test]
    async fn prune_retains_most_recent_per_contract() {
        let (_dir, cache) = open_tmp();
        for i in 1..=4u64 {
            cache.put("c1", sk(i), i as i32).await.unwrap();
        }
        cache.prune(1).await.unwrap();
        assert_eq!(cache.keys("c1").await.unwrap(), vec![sk(4)]);
    }
}

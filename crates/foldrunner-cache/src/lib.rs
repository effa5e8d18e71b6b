//! Sort-key keyed state cache (spec §3 `SortKeyCache<V>`, §4.2).
//!
//! `(contract_tx_id, sort_key) -> V`, totally ordered by sort-key within
//! each contract, with exact, last, and `<=` lookups. Range lookups must be
//! atomic with respect to concurrent `put`s to the *same* contract;
//! cross-contract operations need not be linearizable (spec §4.2). Two
//! backends are provided: [`memory::MemorySortKeyCache`] (in-process,
//! `BTreeMap`-per-contract) and [`rocks::RocksDbSortKeyCache`] (persistent,
//! lexicographically-namespaced, grounded on the `!C!<sort_key>` layout
//! from spec §6).

pub mod error;
pub mod memory;
pub mod rocks;
pub mod stats;

pub use error::{CacheError, CacheResult};
pub use stats::CacheStats;

use async_trait::async_trait;
use foldrunner_core::SortKey;

/// The cache contract from spec §4.2.
#[async_trait]
pub trait SortKeyCache<V>: Send + Sync
where
    V: Send + Sync,
{
    /// Exact match at `sort_key`.
    async fn get(&self, contract: &str, sort_key: &SortKey) -> CacheResult<Option<(SortKey, V)>>;

    /// Greatest stored sort-key for `contract`.
    async fn get_last(&self, contract: &str) -> CacheResult<Option<(SortKey, V)>>;

    /// Greatest stored sort-key `<= sort_key` for `contract`.
    async fn get_less_or_equal(&self, contract: &str, sort_key: &SortKey) -> CacheResult<Option<(SortKey, V)>>;

    /// Overwrites `(contract, sort_key)`.
    async fn put(&self, contract: &str, sort_key: SortKey, value: V) -> CacheResult<()>;

    /// Drops every entry for `contract`.
    async fn delete(&self, contract: &str) -> CacheResult<()>;

    /// All stored sort-keys for `contract`, ascending.
    async fn keys(&self, contract: &str) -> CacheResult<Vec<SortKey>>;

    /// Every contract id with at least one cache entry.
    async fn all_contracts(&self) -> CacheResult<Vec<String>>;

    /// Every `(contract, sort_key, value)` triple. Intended for
    /// diagnostics/export, not the evaluator's hot path.
    async fn dump(&self) -> CacheResult<Vec<(String, SortKey, V)>>;

    /// Retains the `n` most-recent entries per contract by descending
    /// sort-key, dropping the rest.
    async fn prune(&self, n: usize) -> CacheResult<()>;

    /// Current hit/miss/put/eviction counters.
    fn stats(&self) -> CacheStats;
}

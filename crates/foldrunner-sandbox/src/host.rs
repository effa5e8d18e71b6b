//! Host capabilities exposed to the guest from inside `handle` (spec
//! §4.5): `read_contract_state`, `view_contract_state`, `write`,
//! `refresh_state`, and a sort-key-scoped key/value sub-store. Defined
//! here, implemented in `foldrunner-eval` (the evaluator owns the
//! scratchpad a real `write()` stages into), so the sandbox crate never
//! depends on the evaluator crate that depends on it.

use async_trait::async_trait;
use foldrunner_core::{FoldResult, SortKey};
use serde_json::Value;

#[async_trait]
pub trait HostCapabilities: Send + Sync {
    async fn read_contract_state(&self, other: &str, sort_key: Option<&str>) -> FoldResult<Value>;
    async fn view_contract_state(&self, other: &str, input: Value) -> FoldResult<Value>;
    async fn write(&self, other: &str, input: Value) -> FoldResult<Value>;
    async fn refresh_state(&self) -> FoldResult<Value>;
    async fn kv_get(&self, key: &str) -> FoldResult<Option<Value>>;
    async fn kv_put(&self, key: &str, value: Value) -> FoldResult<()>;

    /// Tells the host which `(sort_key, cacheable)` a `write()` call made
    /// during the upcoming `handle` belongs to (spec §4.8: host hooks need
    /// interaction-local transactional context). The evaluator calls this
    /// immediately before `handle` and [`clear_write_context`] immediately
    /// after; hosts that never receive internal writes can ignore both.
    ///
    /// [`clear_write_context`]: HostCapabilities::clear_write_context
    async fn set_write_context(&self, _sort_key: &SortKey, _cacheable: bool) {}

    async fn clear_write_context(&self) {}
}

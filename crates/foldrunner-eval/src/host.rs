//! Real `HostCapabilities` (spec §4.5) backing the guest-facing host hooks
//! with the evaluator's own scratchpad and a sibling-contract registry —
//! the counterpart `foldrunner-sandbox::HostCapabilities`'s doc comment
//! promises. `write()` is the one that matters most: it is what lets an
//! internal write (spec §4.7 step 7) actually stage something for the
//! caller contract to pick up.

use crate::contract::Contract;
use crate::scratchpad::InteractionState;
use async_trait::async_trait;
use foldrunner_cache::SortKeyCache;
use foldrunner_core::{CancellationToken, EvalStateResult, FoldError, FoldResult, SortKey};
use foldrunner_sandbox::HostCapabilities;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
struct WriteContext {
    sort_key: SortKey,
    cacheable: bool,
}

/// Looks up a sibling `Contract` by id, same pattern as
/// [`crate::contract::ContractRegistryResolver`].
pub type ContractLookup<S> = Arc<dyn Fn(&str) -> Option<Arc<Contract<S>>> + Send + Sync>;

pub struct EvaluatorHost<S, C> {
    scratchpad: Arc<InteractionState<S, C>>,
    lookup: ContractLookup<S>,
    write_ctx: Mutex<Option<WriteContext>>,
}

impl<S, C> EvaluatorHost<S, C>
where
    S: Clone + Send + Sync,
    C: SortKeyCache<EvalStateResult<S>>,
{
    pub fn new(scratchpad: Arc<InteractionState<S, C>>, lookup: ContractLookup<S>) -> Self {
        Self { scratchpad, lookup, write_ctx: Mutex::new(None) }
    }

    fn resolve(&self, other: &str) -> FoldResult<Arc<Contract<S>>> {
        (self.lookup)(other).ok_or_else(|| FoldError::protocol(format!("unknown contract in host call: {other}")))
    }
}

#[async_trait]
impl<S, C> HostCapabilities for EvaluatorHost<S, C>
where
    S: Clone + Send + Sync + Serialize + DeserializeOwned + From<Value> + 'static,
    C: SortKeyCache<EvalStateResult<S>> + 'static,
{
    async fn read_contract_state(&self, other: &str, sort_key: Option<&str>) -> FoldResult<Value> {
        let contract = self.resolve(other)?;
        let at = sort_key.map(SortKey::from_raw);
        let (_, result) = contract.read_state(at, Vec::new(), CancellationToken::new()).await?;
        Ok(serde_json::to_value(&result.state)?)
    }

    async fn view_contract_state(&self, other: &str, input: Value) -> FoldResult<Value> {
        let contract = self.resolve(other)?;
        match contract.view_state(input, other).await? {
            crate::contract::InteractionResult::Ok { state, result } => {
                Ok(result.unwrap_or(serde_json::to_value(&state)?))
            }
            crate::contract::InteractionResult::Error { error_message } => Err(FoldError::contract(error_message)),
            crate::contract::InteractionResult::Exception { error_message } => Err(FoldError::exception(error_message)),
        }
    }

    /// Stages `input` as `other`'s new state at the sort-key of the
    /// interaction currently being folded, per spec §4.7 step 7: "the
    /// writer's fold will, via its host hooks, stage a state update to
    /// this contract inside the interaction-state scratchpad."
    async fn write(&self, other: &str, input: Value) -> FoldResult<Value> {
        let ctx = self
            .write_ctx
            .lock()
            .await
            .clone()
            .ok_or_else(|| FoldError::protocol("write() called outside an interaction".to_string()))?;
        self.scratchpad.update(other, EvalStateResult::new(input.clone().into()), ctx.sort_key, ctx.cacheable).await;
        Ok(input)
    }

    async fn refresh_state(&self) -> FoldResult<Value> {
        Ok(Value::Null)
    }

    async fn kv_get(&self, _key: &str) -> FoldResult<Option<Value>> {
        Ok(None)
    }

    async fn kv_put(&self, _key: &str, _value: Value) -> FoldResult<()> {
        Ok(())
    }

    async fn set_write_context(&self, sort_key: &SortKey, cacheable: bool) {
        *self.write_ctx.lock().await = Some(WriteContext { sort_key: sort_key.clone(), cacheable });
    }

    async fn clear_write_context(&self) {
        *self.write_ctx.lock().await = None;
    }
}

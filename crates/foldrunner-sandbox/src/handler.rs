//! The `Handler<S>` boundary (spec §4.5), grounded on the teacher's
//! `neo-vm` interpreter/host split: the evaluator never inspects guest
//! internals, only this narrow trait plus the tagged `HandlerResult`.

use async_trait::async_trait;
use foldrunner_core::{EvalStateResult, FoldResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything about one interaction the guest needs besides its own state
/// (spec §4.5: "caller, block, transaction").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractInteraction {
    pub input: Value,
    pub caller: String,
    pub interaction_type: InteractionType,
    pub block_height: u64,
    pub block_id: String,
    pub block_timestamp: u64,
    pub transaction_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Write,
}

/// The outcome of one `handle` call (spec §4.5).
#[derive(Debug, Clone)]
pub enum HandlerResult<S> {
    Ok {
        state: S,
        result: Option<Value>,
        gas_used: Option<u64>,
        event: Option<Value>,
    },
    /// Business-level rejection. A "known error": the interaction is
    /// marked invalid but the fold continues.
    Error { error_message: String },
    /// Anything the guest didn't classify as a business error. Fatal
    /// unless `ignore_exceptions` is set.
    Exception { error_message: String },
}

/// Per-call context threaded through `handle` (call depth, contract id,
/// active definition's `src_tx_id` — used by host hooks and logging, not
/// by the guest's business logic).
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub contract_tx_id: String,
    pub src_tx_id: String,
    pub call_depth: u32,
}

/// The sandbox boundary the evaluator depends on. One instance is bound to
/// a single compiled source and reseeded between interactions via
/// `init_state`; it is not expected to be `Send` across await points by
/// itself — implementations that wrap a non-thread-safe VM should hold
/// their own internal synchronization.
#[async_trait]
pub trait Handler<S>: Send + Sync
where
    S: Send + Sync,
{
    /// Reseeds internal guest state ahead of folding the next interaction.
    fn init_state(&mut self, state: S);

    async fn handle(
        &mut self,
        ctx: &ExecutionContext,
        current: &EvalStateResult<S>,
        interaction: &ContractInteraction,
    ) -> FoldResult<HandlerResult<S>>;

    /// Invoked at most once per root evaluation, only when
    /// `use_constructor` is set and the contract manifest enables it
    /// (spec §4.5).
    async fn maybe_call_state_constructor(&mut self, initial_state: S, ctx: &ExecutionContext) -> FoldResult<S>;
}

//! Contract facade (spec §4.9): the user-facing operations built on top of
//! a [`StateEvaluator`], grounded on `neo-rpc-client`'s thin
//! request-assembling client wrapped around a lower-level transport.

use crate::evaluator::{CallStack, EvalContext, InternalWriteResolver, StateEvaluator};
use async_trait::async_trait;
use foldrunner_core::{CancellationToken, EvalStateResult, FoldResult, SortKey};
use foldrunner_loader::{DefinitionLoader, InteractionLoader, LoadOptions};
use foldrunner_sandbox::{EvaluationOptions, ExecutorFactory, Handler, HostCapabilities};
use std::sync::Arc;

/// Classification returned by `viewState`/`dryWrite` (spec §4.9, §7:
/// "never reject for business-level errors").
#[derive(Debug, Clone)]
pub enum InteractionResult<S> {
    Ok { state: S, result: Option<serde_json::Value> },
    Error { error_message: String },
    Exception { error_message: String },
}

/// One deployed contract, wired to its definition loader, interaction
/// loader, executor factory, and the shared evaluator. `Contract` is the
/// unit of internal-write resolution: the evaluator calls back into it
/// through [`InternalWriteResolver`] to recursively evaluate other
/// contracts reached via `Interact-Write`.
pub struct Contract<S> {
    pub contract_tx_id: String,
    definition_loader: Arc<dyn DefinitionLoader>,
    interaction_loader: Arc<dyn InteractionLoader>,
    executor_factory: Arc<dyn ExecutorFactory<S>>,
    evaluator: Arc<dyn StateEvaluator<S>>,
    host: Arc<dyn HostCapabilities>,
    options: EvaluationOptions,
}

impl<S> Contract<S>
where
    S: Clone + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
{
    pub fn new(
        contract_tx_id: impl Into<String>,
        definition_loader: Arc<dyn DefinitionLoader>,
        interaction_loader: Arc<dyn InteractionLoader>,
        executor_factory: Arc<dyn ExecutorFactory<S>>,
        evaluator: Arc<dyn StateEvaluator<S>>,
        host: Arc<dyn HostCapabilities>,
        options: EvaluationOptions,
    ) -> Self {
        Self {
            contract_tx_id: contract_tx_id.into(),
            definition_loader,
            interaction_loader,
            executor_factory,
            evaluator,
            host,
            options,
        }
    }

    /// `readState(sort_key?, caller_stack?, signal?) -> (sort_key,
    /// EvalStateResult)` (spec §4.9).
    pub async fn read_state(
        &self,
        sort_key: Option<SortKey>,
        caller_stack: CallStack,
        cancellation: CancellationToken,
    ) -> FoldResult<(SortKey, EvalStateResult<S>)> {
        let definition = self.definition_loader.load(&self.contract_tx_id, None).await?;
        let interactions = self
            .interaction_loader
            .load(&self.contract_tx_id, None, sort_key.as_ref(), &LoadOptions { cancellation: cancellation.clone(), ..Default::default() })
            .await?;
        let sorted = foldrunner_core::sort(interactions);

        let handler = self.executor_factory.create(&definition, &self.options, self.host.clone()).await?;
        let deps = self.executor_factory.deps();

        let ctx = EvalContext {
            definition,
            interactions: sorted,
            requested_sort_key: sort_key,
            options: self.options.clone(),
            handler,
            caller_stack,
            cancellation,
            definition_loader: self.definition_loader.clone(),
            executor_factory: self.executor_factory.clone(),
            host: self.host.clone(),
            vrf_verifier: deps.vrf_verifier,
            evm_verifier: deps.evm_verifier,
            progress: deps.progress,
        };
        self.evaluator.eval(ctx).await
    }

    /// `viewState(input)` (spec §4.9): synthesizes a dry interaction and
    /// runs the handler without persisting anything.
    pub async fn view_state(&self, input: serde_json::Value, caller: &str) -> FoldResult<InteractionResult<S>> {
        self.simulate(input, caller).await
    }

    /// `dryWrite(input, overridden_caller?)` (spec §4.9): same mechanics
    /// as `view_state`, documented separately because write semantics
    /// (e.g. gas accounting) are preserved for what-if checks.
    pub async fn dry_write(&self, input: serde_json::Value, overridden_caller: Option<&str>) -> FoldResult<InteractionResult<S>> {
        let caller = overridden_caller.unwrap_or(&self.contract_tx_id).to_string();
        self.simulate(input, &caller).await
    }

    async fn simulate(&self, input: serde_json::Value, caller: &str) -> FoldResult<InteractionResult<S>> {
        let (_, base) = self.read_state(None, Vec::new(), CancellationToken::new()).await?;
        let definition = self.definition_loader.load(&self.contract_tx_id, None).await?;
        let mut handler = self.executor_factory.create(&definition, &self.options, self.host.clone()).await?;
        handler.init_state(base.state.clone());

        // A dry run must never observe (or extend) write context left
        // behind by a real fold that used this same host instance.
        self.host.clear_write_context().await;

        let exec_ctx = foldrunner_sandbox::ExecutionContext {
            contract_tx_id: self.contract_tx_id.clone(),
            src_tx_id: definition.src_tx_id.clone(),
            call_depth: 0,
        };
        let contract_interaction = foldrunner_sandbox::ContractInteraction {
            input,
            caller: caller.to_string(),
            interaction_type: foldrunner_sandbox::InteractionType::Write,
            block_height: 0,
            block_id: "dry".into(),
            block_timestamp: 0,
            transaction_id: "dry".into(),
        };

        match handler.handle(&exec_ctx, &base, &contract_interaction).await? {
            foldrunner_sandbox::HandlerResult::Ok { state, result, .. } => Ok(InteractionResult::Ok { state, result }),
            foldrunner_sandbox::HandlerResult::Error { error_message } => Ok(InteractionResult::Error { error_message }),
            foldrunner_sandbox::HandlerResult::Exception { error_message } => Ok(InteractionResult::Exception { error_message }),
        }
    }

    /// `currentState()` (spec §4.9): `readState` at the latest known
    /// sort-key.
    pub async fn current_state(&self) -> FoldResult<EvalStateResult<S>> {
        let (_, result) = self.read_state(None, Vec::new(), CancellationToken::new()).await?;
        Ok(result)
    }
}

impl<S> Contract<S>
where
    S: Clone + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
{
    /// `currentBalance()` (spec §4.9, PST convenience): reads
    /// `state.balances[owner]` when the state happens to carry that shape.
    /// Any other shape yields `None` rather than an error — this is a
    /// convenience accessor, not a protocol guarantee.
    pub async fn current_balance(&self, owner: &str) -> FoldResult<Option<u64>> {
        let state = self.current_state().await?;
        let value = serde_json::to_value(&state.state).unwrap_or(serde_json::Value::Null);
        Ok(value.get("balances").and_then(|b| b.get(owner)).and_then(|v| v.as_u64()))
    }
}

/// Default `InternalWriteResolver`: delegates to another `Contract`'s
/// `read_state`. Callers assemble a registry mapping contract id ->
/// `Contract` and construct one of these per evaluation root.
pub struct ContractRegistryResolver<S> {
    pub lookup: Arc<dyn Fn(&str) -> Option<Arc<Contract<S>>> + Send + Sync>,
}

#[async_trait]
impl<S> InternalWriteResolver<S> for ContractRegistryResolver<S>
where
    S: Clone + Send + Sync + serde::Serialize + serde::de::DeserializeOwned,
{
    async fn resolve_write(
        &self,
        writer_contract: &str,
        at: &SortKey,
        caller_stack: CallStack,
        cancellation: CancellationToken,
    ) -> FoldResult<EvalStateResult<S>> {
        let contract = (self.lookup)(writer_contract).ok_or_else(|| {
            foldrunner_core::FoldError::protocol(format!("unknown contract in internal write: {writer_contract}"))
        })?;
        let (_, result) = contract.read_state(Some(at.clone()), caller_stack, cancellation).await?;
        Ok(result)
    }
}

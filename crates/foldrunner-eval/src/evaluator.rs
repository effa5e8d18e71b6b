//! State evaluator (spec §4.7): the left-fold of a contract's interaction
//! stream through its `Handler`, with cache-assisted base-state resolution,
//! cross-contract internal writes, and the built-in `Evolve` modifier.

use crate::modifiers::ExecutionContextModifier;
use crate::scratchpad::InteractionState;
use async_trait::async_trait;
use foldrunner_cache::SortKeyCache;
use foldrunner_core::interaction::find_tag;
use foldrunner_core::{
    CancellationToken, ContractDefinition, ContractErrorSubtype, EvalStateResult, FoldError, FoldResult, Interaction,
    SortKey,
};
use foldrunner_loader::DefinitionLoader;
use foldrunner_sandbox::{
    ContractInteraction, EvaluationOptions, EvmSignatureVerifier, ExecutionContext, ExecutorFactory, Handler,
    HandlerResult, HostCapabilities, InteractionType, ProgressReporter, UnsafeClientPolicy, VrfVerifier,
};
use std::sync::Arc;
use std::time::Duration;

/// `(contract, interaction_id)` pairs up the call chain, used by the
/// inf-loop guard (spec §4.7 step 2).
pub type CallStack = Vec<(String, String)>;

const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Detects a number outside JS's safe integer range anywhere in a state
/// value (spec §4.5: `allow_big_int` gates whether the engine tolerates
/// BigInt-shaped numbers in state).
fn value_uses_big_int(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i)
            } else if let Some(u) = n.as_u64() {
                u > MAX_SAFE_INTEGER as u64
            } else {
                n.as_f64().is_none()
            }
        }
        serde_json::Value::Array(items) => items.iter().any(value_uses_big_int),
        serde_json::Value::Object(map) => map.values().any(value_uses_big_int),
        _ => false,
    }
}

/// Resolves an internal write by recursively evaluating the writer
/// contract. Implemented by the `Contract` facade, which owns the registry
/// of known contracts; kept as a trait here so the evaluator never depends
/// on the facade (which depends on the evaluator).
#[async_trait]
pub trait InternalWriteResolver<S>: Send + Sync {
    async fn resolve_write(
        &self,
        writer_contract: &str,
        at: &SortKey,
        caller_stack: CallStack,
        cancellation: CancellationToken,
    ) -> FoldResult<EvalStateResult<S>>;
}

/// Everything one `eval` call needs (spec §4.7 "Entry").
pub struct EvalContext<S> {
    pub definition: ContractDefinition,
    /// Already sorted ascending by sort-key (spec §4.1).
    pub interactions: Vec<Interaction>,
    pub requested_sort_key: Option<SortKey>,
    pub options: EvaluationOptions,
    pub handler: Box<dyn Handler<S>>,
    pub caller_stack: CallStack,
    pub cancellation: CancellationToken,
    /// Needed to reload a replacement source on `Evolve` (spec §4.7 step 10).
    pub definition_loader: Arc<dyn DefinitionLoader>,
    /// Needed to rebuild `handler` against the reloaded definition.
    pub executor_factory: Arc<dyn ExecutorFactory<S>>,
    pub host: Arc<dyn HostCapabilities>,
    pub vrf_verifier: Option<Arc<dyn VrfVerifier>>,
    pub evm_verifier: Option<Arc<dyn EvmSignatureVerifier>>,
    pub progress: Option<Arc<dyn ProgressReporter>>,
}

#[async_trait]
pub trait StateEvaluator<S>: Send + Sync
where
    S: Send + Sync,
{
    async fn eval(&self, ctx: EvalContext<S>) -> FoldResult<(SortKey, EvalStateResult<S>)>;
}

/// Shared fold algorithm. `CacheableStateEvaluator` adds the cache-probe
/// shortcut (spec §4.7 step 1) in front of this; `BaseStateEvaluator` skips
/// straight to it.
pub struct BaseStateEvaluator<S, C> {
    cache: Arc<C>,
    scratchpad: Arc<InteractionState<S, C>>,
    modifiers: Vec<Box<dyn ExecutionContextModifier>>,
    internal_writes: Option<Arc<dyn InternalWriteResolver<S>>>,
}

impl<S, C> BaseStateEvaluator<S, C>
where
    S: Clone + Send + Sync + From<serde_json::Value> + serde::Serialize,
    C: SortKeyCache<EvalStateResult<S>>,
{
    pub fn new(cache: Arc<C>, scratchpad: Arc<InteractionState<S, C>>) -> Self {
        Self { cache, scratchpad, modifiers: Vec::new(), internal_writes: None }
    }

    pub fn with_modifier(mut self, modifier: Box<dyn ExecutionContextModifier>) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_internal_write_resolver(mut self, resolver: Arc<dyn InternalWriteResolver<S>>) -> Self {
        self.internal_writes = Some(resolver);
        self
    }

    async fn fold(&self, mut ctx: EvalContext<S>) -> FoldResult<(SortKey, EvalStateResult<S>)> {
        let contract = ctx.definition.tx_id.clone();

        // Step 2: inf-loop guard — excise any interaction already on the
        // stack for this same contract, truncating there.
        if let Some(cut) = ctx
            .caller_stack
            .iter()
            .position(|(c, _)| c == &contract)
            .map(|idx| ctx.caller_stack[idx].1.clone())
        {
            if let Some(pos) = ctx.interactions.iter().position(|i| i.id == cut) {
                ctx.interactions.truncate(pos);
            }
        }

        // Step 3: base state — greatest cached sort-key <= requested, or
        // `init_state` if none.
        let requested = ctx.requested_sort_key.clone();
        let base = match &requested {
            Some(sk) => self.scratchpad.get(&contract, sk).await?,
            None => self.cache.get_last(&contract).await?.map(|(k, v)| (k, v)),
        };

        let (base_sort_key, mut result) = match base {
            Some((sk, r)) => (sk, r),
            None => (SortKey::genesis(), EvalStateResult::new(ctx.definition.init_state.clone().into())),
        };

        let missing: Vec<Interaction> = ctx
            .interactions
            .iter()
            .filter(|i| {
                let after_base = i.sort_key.as_ref().map_or(true, |k| *k > base_sort_key);
                let through_requested = requested.as_ref().map_or(true, |r| i.sort_key.as_ref().map_or(true, |k| k <= r));
                after_base && through_requested
            })
            .cloned()
            .collect();

        // Step 4: constructor.
        if ctx.options.use_constructor && base_sort_key.is_genesis() && result.validity.is_empty() {
            let exec_ctx = ExecutionContext { contract_tx_id: contract.clone(), src_tx_id: ctx.definition.src_tx_id.clone(), call_depth: ctx.caller_stack.len() as u32 };
            match ctx.handler.maybe_call_state_constructor(result.state.clone(), &exec_ctx).await {
                Ok(state) => {
                    result.state = state;
                    result.record("__init", true, None);
                }
                Err(_) => {
                    result.record("__init", false, Some("constructor failed".to_string()));
                    return Ok((base_sort_key, result));
                }
            }
        }

        if missing.is_empty() {
            if result.validity.is_empty() && base_sort_key.is_genesis() {
                self.scratchpad.set_initial(&contract, result.clone(), SortKey::genesis()).await;
            }
            return Ok((base_sort_key, result));
        }

        let mut current_sort_key = base_sort_key.clone();
        let mut stop = false;

        let total = missing.len();
        for (index, interaction) in missing.iter().enumerate() {
            if ctx.cancellation.is_cancelled() {
                return Err(FoldError::Abort);
            }
            if stop {
                break;
            }

            let sort_key = interaction.sort_key.clone().unwrap_or_else(SortKey::genesis);

            // Step 5: VRF / EVM-signature verification, before the
            // interaction is classified or folded.
            if let Some(proof) = &interaction.vrf {
                if let Some(verifier) = &ctx.vrf_verifier {
                    if !verifier.verify(interaction, proof).await {
                        result.record(&interaction.id, false, Some("VRF proof verification failed".to_string()));
                        current_sort_key = sort_key;
                        continue;
                    }
                }
            }
            if find_tag(&interaction.tags, "Signature").is_some() {
                if let Some(verifier) = &ctx.evm_verifier {
                    if !verifier.verify(interaction).await {
                        result.record(&interaction.id, false, Some("EVM signature verification failed".to_string()));
                        current_sort_key = sort_key;
                        continue;
                    }
                }
            }

            let Some(input) = find_tag(&interaction.tags, "Input").and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok()) else {
                result.record(&interaction.id, false, Some("missing or unparsable Input tag".to_string()));
                current_sort_key = sort_key;
                continue;
            };

            let target = find_tag(&interaction.tags, "Interact-Write");
            let is_internal_write = target.is_some_and(|t| t != contract);

            if is_internal_write {
                if !ctx.options.internal_writes {
                    current_sort_key = sort_key;
                    continue;
                }
                let writer = target.unwrap().to_string();
                let Some(resolver) = &self.internal_writes else {
                    result.record(&interaction.id, false, Some("internal writes enabled but no resolver configured".to_string()));
                    current_sort_key = sort_key;
                    continue;
                };
                let mut stack = ctx.caller_stack.clone();
                stack.push((contract.clone(), interaction.id.clone()));
                let writer_result = resolver.resolve_write(&writer, &sort_key, stack, ctx.cancellation.clone()).await?;
                let valid = writer_result.validity.get(&interaction.id).copied().unwrap_or(false);
                if let Some((_, staged)) = self.scratchpad.get(&contract, &sort_key).await? {
                    if valid {
                        result = staged;
                        result.record(&interaction.id, true, None);
                    } else {
                        let msg = writer_result.error_messages.get(&interaction.id).cloned();
                        result.record(&interaction.id, false, msg);
                    }
                } else {
                    result.record(&interaction.id, false, Some("writer produced no staged update".to_string()));
                }
                current_sort_key = sort_key;
                self.run_modifiers(&mut ctx, interaction, &contract).await?;
                if let Some(progress) = &ctx.progress {
                    progress.on_interaction_evaluated(&contract, &interaction.id, index, total);
                }
                continue;
            }

            let caller = interaction.owner_address.clone();
            let exec_ctx = ExecutionContext { contract_tx_id: contract.clone(), src_tx_id: ctx.definition.src_tx_id.clone(), call_depth: ctx.caller_stack.len() as u32 };
            let contract_interaction = ContractInteraction {
                input,
                caller,
                interaction_type: InteractionType::Write,
                block_height: interaction.block.height,
                block_id: interaction.block.id.clone(),
                block_timestamp: interaction.block.timestamp,
                transaction_id: interaction.id.clone(),
            };

            let cacheable = interaction.is_cacheable();
            ctx.host.set_write_context(&sort_key, cacheable).await;
            let deadline = Duration::from_secs(ctx.options.max_interaction_evaluation_time_seconds);
            let handled = match tokio::time::timeout(deadline, ctx.handler.handle(&exec_ctx, &result, &contract_interaction)).await {
                Ok(handled) => handled,
                Err(_) => {
                    self.scratchpad.rollback(&contract, interaction, false).await;
                    Ok(HandlerResult::Exception {
                        error_message: format!(
                            "interaction {} exceeded the {}s evaluation deadline",
                            interaction.id, ctx.options.max_interaction_evaluation_time_seconds
                        ),
                    })
                }
            };
            ctx.host.clear_write_context().await;

            match handled {
                Ok(HandlerResult::Ok { state, .. }) => {
                    if !ctx.options.allow_big_int && value_uses_big_int(&serde_json::to_value(&state)?) {
                        result.record(&interaction.id, false, Some("state contains a number outside the safe integer range and allow_big_int is false".to_string()));
                    } else {
                        result.state = state;
                        result.record(&interaction.id, true, None);
                    }
                }
                Ok(HandlerResult::Error { error_message }) => {
                    result.record(&interaction.id, false, Some(error_message));
                }
                Ok(HandlerResult::Exception { error_message }) => {
                    if !ctx.options.ignore_exceptions {
                        return Err(FoldError::exception(error_message));
                    }
                    result.record(&interaction.id, false, Some(error_message));
                }
                Err(FoldError::Contract { message, subtype: Some(ContractErrorSubtype::UnsafeClientSkip) }) => match ctx.options.unsafe_client {
                    UnsafeClientPolicy::Throw => {
                        return Err(FoldError::contract_with_subtype(message, ContractErrorSubtype::UnsafeClientSkip));
                    }
                    UnsafeClientPolicy::Skip => {
                        result.record(&interaction.id, false, Some(message));
                        stop = true;
                    }
                    UnsafeClientPolicy::Allow => {
                        tracing::warn!(contract, interaction = %interaction.id, "unsafe client reference allowed by policy");
                        result.record(&interaction.id, true, None);
                    }
                },
                Err(FoldError::Contract { message, subtype: Some(subtype) }) => {
                    result.record(&interaction.id, false, Some(message));
                    if subtype.stops_after_evolve() {
                        stop = true;
                    }
                }
                Err(FoldError::Contract { message, subtype: None }) => {
                    result.record(&interaction.id, false, Some(message));
                }
                Err(other) => return Err(other),
            }

            self.scratchpad.update(&contract, result.clone(), sort_key.clone(), cacheable).await;
            current_sort_key = sort_key;

            self.run_modifiers(&mut ctx, interaction, &contract).await?;
            if let Some(progress) = &ctx.progress {
                progress.on_interaction_evaluated(&contract, &interaction.id, index, total);
            }

            if ctx.options.cache_every_n_interactions > 0 {
                self.scratchpad.commit(&contract, interaction, false).await?;
            }
        }

        // Commit/rollback (step 9). At root (empty caller stack before this
        // call) the last interaction's validity decides; callers inside a
        // nested readState leave the decision to the root.
        if ctx.caller_stack.is_empty() {
            if let Some(last) = missing.last() {
                let ok = result.validity.get(&last.id).copied().unwrap_or(true);
                if ok || ctx.options.update_cache_for_each_interaction {
                    self.scratchpad.commit(&contract, last, false).await?;
                } else {
                    self.scratchpad.rollback(&contract, last, false).await;
                }
            }
        }

        Ok((current_sort_key, result))
    }

    /// Step 10 (spec §4.7, §9 Evolve): reload the definition against the
    /// new source and rebuild the handler from it. Either failing leaves
    /// `ctx.definition`/`ctx.handler` untouched — the fold keeps running
    /// against the previous source rather than aborting.
    async fn run_modifiers(&self, ctx: &mut EvalContext<S>, interaction: &Interaction, contract: &str) -> FoldResult<()> {
        for modifier in &self.modifiers {
            if let Some(new_src_tx_id) = modifier.detect_rebind(interaction) {
                match ctx.definition_loader.load(contract, Some(&new_src_tx_id)).await {
                    Ok(new_definition) => match ctx.executor_factory.create(&new_definition, &ctx.options, ctx.host.clone()).await {
                        Ok(new_handler) => {
                            tracing::info!(contract, new_src_tx_id, "evolve: reloaded source and rebound handler");
                            ctx.definition = new_definition;
                            ctx.handler = new_handler;
                        }
                        Err(err) => {
                            tracing::warn!(contract, new_src_tx_id, %err, "evolve: failed to rebuild handler for reloaded source, keeping previous source");
                        }
                    },
                    Err(err) => {
                        tracing::warn!(contract, new_src_tx_id, %err, "evolve: failed to reload source, keeping previous source");
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<S, C> StateEvaluator<S> for BaseStateEvaluator<S, C>
where
    S: Clone + Send + Sync + From<serde_json::Value> + serde::Serialize,
    C: SortKeyCache<EvalStateResult<S>>,
{
    async fn eval(&self, ctx: EvalContext<S>) -> FoldResult<(SortKey, EvalStateResult<S>)> {
        self.fold(ctx).await
    }
}

/// Adds the cache-probe shortcut from spec §4.7 step 1: an exact hit at the
/// requested sort-key returns immediately without touching the handler.
pub struct CacheableStateEvaluator<S, C> {
    cache: Arc<C>,
    inner: BaseStateEvaluator<S, C>,
}

impl<S, C> CacheableStateEvaluator<S, C>
where
    S: Clone + Send + Sync + From<serde_json::Value> + serde::Serialize,
    C: SortKeyCache<EvalStateResult<S>>,
{
    pub fn new(cache: Arc<C>, scratchpad: Arc<InteractionState<S, C>>) -> Self {
        Self { cache: cache.clone(), inner: BaseStateEvaluator::new(cache, scratchpad) }
    }

    pub fn with_modifier(mut self, modifier: Box<dyn ExecutionContextModifier>) -> Self {
        self.inner = self.inner.with_modifier(modifier);
        self
    }

    pub fn with_internal_write_resolver(mut self, resolver: Arc<dyn InternalWriteResolver<S>>) -> Self {
        self.inner = self.inner.with_internal_write_resolver(resolver);
        self
    }
}

#[async_trait]
impl<S, C> StateEvaluator<S> for CacheableStateEvaluator<S, C>
where
    S: Clone + Send + Sync + From<serde_json::Value> + serde::Serialize,
    C: SortKeyCache<EvalStateResult<S>>,
{
    async fn eval(&self, ctx: EvalContext<S>) -> FoldResult<(SortKey, EvalStateResult<S>)> {
        if let Some(requested) = &ctx.requested_sort_key {
            if let Some((key, cached)) = self.cache.get(&ctx.definition.tx_id, requested).await? {
                return Ok((key, cached));
            }
        }
        self.inner.eval(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::EvolveModifier;
    use foldrunner_cache::MemorySortKeyCache;
    use foldrunner_core::interaction::BlockInfo;
    use foldrunner_core::{ConfirmationStatus, ContractType, Source, Tag};
    use foldrunner_loader::{LoaderError, LoaderResult};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    struct NullHost;
    #[async_trait]
    impl HostCapabilities for NullHost {
        async fn read_contract_state(&self, _other: &str, _sort_key: Option<&str>) -> FoldResult<Value> {
            Ok(Value::Null)
        }
        async fn view_contract_state(&self, _other: &str, _input: Value) -> FoldResult<Value> {
            Ok(Value::Null)
        }
        async fn write(&self, _other: &str, _input: Value) -> FoldResult<Value> {
            Ok(Value::Null)
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
    }

    /// Loads whichever definition its map has under the forced source id
    /// (or "src1" when nothing is forced), grounded on
    /// `foldrunner_loader::definition_loader`'s `MockFetcher` pattern.
    struct MultiSourceDefinitionLoader {
        by_src: HashMap<String, ContractDefinition>,
    }

    #[async_trait]
    impl DefinitionLoader for MultiSourceDefinitionLoader {
        async fn load(&self, contract_tx_id: &str, forced_src_tx_id: Option<&str>) -> LoaderResult<ContractDefinition> {
            let src = forced_src_tx_id.unwrap_or("src1");
            self.by_src
                .get(src)
                .cloned()
                .map(|mut d| {
                    d.tx_id = contract_tx_id.to_string();
                    d
                })
                .ok_or_else(|| LoaderError::Protocol(format!("unknown src {src}")))
        }
    }

    struct FailingDefinitionLoader;

    #[async_trait]
    impl DefinitionLoader for FailingDefinitionLoader {
        async fn load(&self, _contract_tx_id: &str, _forced_src_tx_id: Option<&str>) -> LoaderResult<ContractDefinition> {
            Err(LoaderError::Protocol("source transaction not found".into()))
        }
    }

    /// Doubles the amount instead of adding it, so tests can tell whether
    /// the handler bound to "src2" ran.
    struct DoublingHandler;

    #[async_trait]
    impl Handler<Value> for DoublingHandler {
        fn init_state(&mut self, _state: Value) {}
        async fn handle(
            &mut self,
            _ctx: &ExecutionContext,
            current: &EvalStateResult<Value>,
            interaction: &ContractInteraction,
        ) -> FoldResult<HandlerResult<Value>> {
            let amount = interaction.input.get("amount").and_then(Value::as_i64).unwrap_or(0);
            let counter = current.state.get("counter").and_then(Value::as_i64).unwrap_or(0);
            Ok(HandlerResult::Ok { state: json!({"counter": counter + amount * 2}), result: None, gas_used: None, event: None })
        }
        async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
            Ok(initial_state)
        }
    }

    /// Picks `CounterHandler` or `DoublingHandler` by `definition.src_tx_id`.
    struct SrcSwitchedExecutorFactory;

    #[async_trait]
    impl ExecutorFactory<Value> for SrcSwitchedExecutorFactory {
        async fn create(
            &self,
            definition: &ContractDefinition,
            _opts: &EvaluationOptions,
            _host: Arc<dyn HostCapabilities>,
        ) -> FoldResult<Box<dyn Handler<Value>>> {
            match definition.src_tx_id.as_str() {
                "src2" => Ok(Box::new(DoublingHandler)),
                _ => Ok(Box::new(CounterHandler)),
            }
        }
    }

    struct AlwaysFailingExecutorFactory;

    #[async_trait]
    impl ExecutorFactory<Value> for AlwaysFailingExecutorFactory {
        async fn create(
            &self,
            _definition: &ContractDefinition,
            _opts: &EvaluationOptions,
            _host: Arc<dyn HostCapabilities>,
        ) -> FoldResult<Box<dyn Handler<Value>>> {
            Err(FoldError::protocol("no plugin registered".to_string()))
        }
    }

    /// Folds `{"op": "add", "amount": N}` into a running counter, used by
    /// both the direct-interaction and internal-write tests below.
    struct CounterHandler;

    #[async_trait]
    impl Handler<Value> for CounterHandler {
        fn init_state(&mut self, _state: Value) {}

        async fn handle(
            &mut self,
            _ctx: &ExecutionContext,
            current: &EvalStateResult<Value>,
            interaction: &ContractInteraction,
        ) -> FoldResult<HandlerResult<Value>> {
            let amount = interaction.input.get("amount").and_then(Value::as_i64);
            let Some(amount) = amount else {
                return Ok(HandlerResult::Error { error_message: "missing amount".into() });
            };
            let counter = current.state.get("counter").and_then(Value::as_i64).unwrap_or(0);
            Ok(HandlerResult::Ok {
                state: json!({"counter": counter + amount}),
                result: None,
                gas_used: None,
                event: None,
            })
        }

        async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
            Ok(initial_state)
        }
    }

    fn definition(init_state: Value) -> ContractDefinition {
        ContractDefinition {
            tx_id: "contract1".into(),
            src_tx_id: "src1".into(),
            src: Source::Text("/* counter */".into()),
            init_state,
            owner: "owner".into(),
            min_fee: None,
            manifest: None,
            contract_type: ContractType::Js,
            wasm_language: None,
            metadata: None,
            testnet: false,
        }
    }

    fn write_interaction(height: u64, amount: i64) -> Interaction {
        Interaction {
            id: format!("i{height}"),
            sort_key: Some(SortKey::new(height, height * 1000, "h")),
            block: BlockInfo { height, id: format!("b{height}"), timestamp: height * 1000 },
            owner_address: "alice".into(),
            tags: vec![Tag::new("Input", json!({"op": "add", "amount": amount}).to_string())],
            confirmation_status: Some(ConfirmationStatus::Confirmed),
            dry: false,
            vrf: None,
        }
    }

    fn evaluator() -> (Arc<MemorySortKeyCache<EvalStateResult<Value>>>, BaseStateEvaluator<Value, MemorySortKeyCache<EvalStateResult<Value>>>) {
        let cache = Arc::new(MemorySortKeyCache::new());
        let scratchpad = Arc::new(InteractionState::new(cache.clone()));
        (cache.clone(), BaseStateEvaluator::new(cache, scratchpad))
    }

    fn eval_ctx(interactions: Vec<Interaction>, requested: Option<SortKey>) -> EvalContext<Value> {
        let mut by_src = HashMap::new();
        by_src.insert("src1".to_string(), definition(json!({"counter": 0})));
        EvalContext {
            definition: definition(json!({"counter": 0})),
            interactions,
            requested_sort_key: requested,
            options: EvaluationOptions::default(),
            handler: Box::new(CounterHandler),
            caller_stack: Vec::new(),
            cancellation: CancellationToken::new(),
            definition_loader: Arc::new(MultiSourceDefinitionLoader { by_src }),
            executor_factory: Arc::new(SrcSwitchedExecutorFactory),
            host: Arc::new(NullHost),
            vrf_verifier: None,
            evm_verifier: None,
            progress: None,
        }
    }

    #[tokio::test]
    async fn empty_history_returns_init_state() {
        let (_, evaluator) = evaluator();
        let (sort_key, result) = evaluator.eval(eval_ctx(Vec::new(), None)).await.unwrap();
        assert!(sort_key.is_genesis());
        assert_eq!(result.state, json!({"counter": 0}));
        assert!(result.validity.is_empty());
    }

    #[tokio::test]
    async fn folds_a_sequence_of_valid_interactions() {
        let (_, evaluator) = evaluator();
        let interactions = vec![write_interaction(1, 5), write_interaction(2, 3), write_interaction(3, 2)];
        let (_, result) = evaluator.eval(eval_ctx(interactions, None)).await.unwrap();
        assert_eq!(result.state, json!({"counter": 10}));
        assert_eq!(result.validity.values().filter(|v| **v).count(), 3);
    }

    #[tokio::test]
    async fn known_error_is_recorded_but_does_not_halt_the_fold() {
        let (_, evaluator) = evaluator();
        let mut bad = write_interaction(2, 0);
        bad.tags = vec![Tag::new("Input", json!({"op": "add"}).to_string())];
        let interactions = vec![write_interaction(1, 5), bad, write_interaction(3, 4)];
        let (_, result) = evaluator.eval(eval_ctx(interactions, None)).await.unwrap();

        assert_eq!(result.state, json!({"counter": 9}));
        assert_eq!(result.validity.get("i2"), Some(&false));
        assert!(result.error_messages.contains_key("i2"));
    }

    #[tokio::test]
    async fn cached_base_state_is_resumed_from() {
        let (cache, evaluator) = evaluator();
        cache.put("contract1", SortKey::new(1, 1000, "h"), EvalStateResult::new(json!({"counter": 100}))).await.unwrap();

        let interactions = vec![write_interaction(1, 5), write_interaction(2, 3)];
        let (_, result) = evaluator.eval(eval_ctx(interactions, None)).await.unwrap();

        assert_eq!(result.state, json!({"counter": 103}), "only the interaction after the cached base-key is re-folded");
    }

    #[tokio::test]
    async fn requested_sort_key_caps_how_far_the_fold_runs() {
        let (_, evaluator) = evaluator();
        let interactions = vec![write_interaction(1, 5), write_interaction(2, 3), write_interaction(3, 2)];
        let (sort_key, result) = evaluator.eval(eval_ctx(interactions, Some(SortKey::new(2, 2000, "h")))).await.unwrap();

        assert_eq!(result.state, json!({"counter": 8}));
        assert_eq!(sort_key, SortKey::new(2, 2000, "h"));
    }

    #[tokio::test]
    async fn evolve_tag_reloads_definition_and_rebinds_the_handler() {
        let cache = Arc::new(MemorySortKeyCache::new());
        let scratchpad = Arc::new(InteractionState::new(cache.clone()));
        let evaluator = BaseStateEvaluator::new(cache.clone(), scratchpad).with_modifier(Box::new(EvolveModifier));

        let mut evolve = write_interaction(2, 1);
        evolve.tags.push(Tag::new("Evolve", "src2"));
        // A third interaction after the evolve proves the *rebuilt* handler
        // (DoublingHandler, bound to src2) is what actually ran, not just
        // that ctx.definition.src_tx_id changed.
        let interactions = vec![write_interaction(1, 5), evolve, write_interaction(3, 4)];

        let mut by_src = HashMap::new();
        by_src.insert("src1".to_string(), definition(json!({"counter": 0})));
        by_src.insert("src2".to_string(), {
            let mut d = definition(json!({"counter": 0}));
            d.src_tx_id = "src2".into();
            d
        });
        let mut ctx = eval_ctx(interactions, None);
        ctx.definition_loader = Arc::new(MultiSourceDefinitionLoader { by_src });
        ctx.executor_factory = Arc::new(SrcSwitchedExecutorFactory);

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        // 5 (src1, +5) then 4*2=8 (src2, doubled) => 13.
        assert_eq!(result.state, json!({"counter": 13}));
    }

    #[tokio::test]
    async fn evolve_tag_keeps_previous_source_when_reload_fails() {
        let cache = Arc::new(MemorySortKeyCache::new());
        let scratchpad = Arc::new(InteractionState::new(cache.clone()));
        let evaluator = BaseStateEvaluator::new(cache.clone(), scratchpad).with_modifier(Box::new(EvolveModifier));

        let mut evolve = write_interaction(2, 1);
        evolve.tags.push(Tag::new("Evolve", "src-missing"));
        let interactions = vec![write_interaction(1, 5), evolve, write_interaction(3, 4)];

        let mut ctx = eval_ctx(interactions, None);
        ctx.definition_loader = Arc::new(FailingDefinitionLoader);

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        // The reload fails, so the original CounterHandler (adds, doesn't
        // double) keeps running for every interaction, including i3.
        assert_eq!(result.state, json!({"counter": 10}));
        assert_eq!(result.validity.get("i3"), Some(&true));
    }

    #[tokio::test]
    async fn evolve_tag_keeps_previous_source_when_handler_rebuild_fails() {
        let cache = Arc::new(MemorySortKeyCache::new());
        let scratchpad = Arc::new(InteractionState::new(cache.clone()));
        let evaluator = BaseStateEvaluator::new(cache.clone(), scratchpad).with_modifier(Box::new(EvolveModifier));

        let mut evolve = write_interaction(2, 1);
        evolve.tags.push(Tag::new("Evolve", "src2"));
        let interactions = vec![write_interaction(1, 5), evolve];

        let mut by_src = HashMap::new();
        by_src.insert("src1".to_string(), definition(json!({"counter": 0})));
        by_src.insert("src2".to_string(), {
            let mut d = definition(json!({"counter": 0}));
            d.src_tx_id = "src2".into();
            d
        });
        let mut ctx = eval_ctx(interactions, None);
        ctx.definition_loader = Arc::new(MultiSourceDefinitionLoader { by_src });
        ctx.executor_factory = Arc::new(AlwaysFailingExecutorFactory);

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.state, json!({"counter": 6}));
    }

    struct FailingResolver;

    #[async_trait]
    impl InternalWriteResolver<Value> for FailingResolver {
        async fn resolve_write(
            &self,
            _writer_contract: &str,
            _at: &SortKey,
            _caller_stack: CallStack,
            _cancellation: CancellationToken,
        ) -> FoldResult<EvalStateResult<Value>> {
            Ok(EvalStateResult::new(json!({})))
        }
    }

    #[tokio::test]
    async fn internal_write_without_staged_update_is_invalid() {
        let cache = Arc::new(MemorySortKeyCache::new());
        let scratchpad = Arc::new(InteractionState::new(cache.clone()));
        let evaluator = BaseStateEvaluator::new(cache, scratchpad).with_internal_write_resolver(Arc::new(FailingResolver));

        let mut interaction = write_interaction(1, 0);
        interaction.tags.push(Tag::new("Interact-Write", "other-contract"));

        let mut ctx = eval_ctx(vec![interaction], None);
        ctx.options = EvaluationOptions { internal_writes: true, ..Default::default() };
        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&false));
    }

    #[tokio::test]
    async fn internal_writes_disabled_skips_the_interaction_entirely() {
        let (_, evaluator) = evaluator();
        let mut interaction = write_interaction(1, 0);
        interaction.tags.push(Tag::new("Interact-Write", "other-contract"));

        let (_, result) = evaluator.eval(eval_ctx(vec![interaction], None)).await.unwrap();
        assert!(result.validity.is_empty(), "skipped interactions are never recorded");
    }

    #[tokio::test]
    async fn cancellation_aborts_mid_fold() {
        let (_, evaluator) = evaluator();
        let token = CancellationToken::new();
        token.cancel();

        let mut ctx = eval_ctx(vec![write_interaction(1, 5)], None);
        ctx.cancellation = token;

        let err = evaluator.eval(ctx).await.unwrap_err();
        assert!(matches!(err, FoldError::Abort));
    }

    struct RejectAllVrf;
    #[async_trait]
    impl VrfVerifier for RejectAllVrf {
        async fn verify(&self, _interaction: &Interaction, _proof: &str) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn failed_vrf_verification_invalidates_the_interaction() {
        let (_, evaluator) = evaluator();
        let mut vrf_interaction = write_interaction(1, 5);
        vrf_interaction.vrf = Some("proof".into());

        let mut ctx = eval_ctx(vec![vrf_interaction], None);
        ctx.vrf_verifier = Some(Arc::new(RejectAllVrf));
        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&false));
        assert_eq!(result.state, json!({"counter": 0}), "the rejected interaction never reaches the handler");
    }

    struct RejectAllEvm;
    #[async_trait]
    impl EvmSignatureVerifier for RejectAllEvm {
        async fn verify(&self, _interaction: &Interaction) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn failed_evm_signature_verification_invalidates_the_interaction() {
        let (_, evaluator) = evaluator();
        let mut signed = write_interaction(1, 5);
        signed.tags.push(Tag::new("Signature", "0xdeadbeef"));

        let mut ctx = eval_ctx(vec![signed], None);
        ctx.evm_verifier = Some(Arc::new(RejectAllEvm));
        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&false));
    }

    struct BigIntHandler;
    #[async_trait]
    impl Handler<Value> for BigIntHandler {
        fn init_state(&mut self, _state: Value) {}
        async fn handle(
            &mut self,
            _ctx: &ExecutionContext,
            _current: &EvalStateResult<Value>,
            _interaction: &ContractInteraction,
        ) -> FoldResult<HandlerResult<Value>> {
            Ok(HandlerResult::Ok { state: json!({"counter": MAX_SAFE_INTEGER + 1}), result: None, gas_used: None, event: None })
        }
        async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
            Ok(initial_state)
        }
    }

    #[tokio::test]
    async fn state_outside_safe_integer_range_is_rejected_by_default() {
        let (_, evaluator) = evaluator();
        let mut ctx = eval_ctx(vec![write_interaction(1, 5)], None);
        ctx.handler = Box::new(BigIntHandler);

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&false));
        assert_eq!(result.state, json!({"counter": 0}), "the offending state update is never applied");
    }

    #[tokio::test]
    async fn allow_big_int_lets_unsafe_integers_through() {
        let (_, evaluator) = evaluator();
        let mut ctx = eval_ctx(vec![write_interaction(1, 5)], None);
        ctx.handler = Box::new(BigIntHandler);
        ctx.options.allow_big_int = true;

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&true));
    }

    struct UnsafeClientHandler;
    #[async_trait]
    impl Handler<Value> for UnsafeClientHandler {
        fn init_state(&mut self, _state: Value) {}
        async fn handle(
            &mut self,
            _ctx: &ExecutionContext,
            _current: &EvalStateResult<Value>,
            _interaction: &ContractInteraction,
        ) -> FoldResult<HandlerResult<Value>> {
            Err(FoldError::contract_with_subtype("references an unsafe client".to_string(), ContractErrorSubtype::UnsafeClientSkip))
        }
        async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
            Ok(initial_state)
        }
    }

    #[tokio::test]
    async fn unsafe_client_throw_policy_aborts_the_fold() {
        let (_, evaluator) = evaluator();
        let mut ctx = eval_ctx(vec![write_interaction(1, 5)], None);
        ctx.handler = Box::new(UnsafeClientHandler);
        ctx.options.unsafe_client = UnsafeClientPolicy::Throw;

        let err = evaluator.eval(ctx).await.unwrap_err();
        match err {
            FoldError::Contract { subtype: Some(ContractErrorSubtype::UnsafeClientSkip), .. } => {}
            other => panic!("expected unsafe-client-skip, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unsafe_client_skip_policy_stops_after_recording_invalid() {
        let (_, evaluator) = evaluator();
        let mut ctx = eval_ctx(vec![write_interaction(1, 5), write_interaction(2, 1)], None);
        ctx.handler = Box::new(UnsafeClientHandler);
        ctx.options.unsafe_client = UnsafeClientPolicy::Skip;

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&false));
        assert!(!result.validity.contains_key("i2"), "the fold stops after the skip");
    }

    #[tokio::test]
    async fn unsafe_client_allow_policy_treats_it_as_valid() {
        let (_, evaluator) = evaluator();
        let mut ctx = eval_ctx(vec![write_interaction(1, 5)], None);
        ctx.handler = Box::new(UnsafeClientHandler);
        ctx.options.unsafe_client = UnsafeClientPolicy::Allow;

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&true));
    }

    struct SlowHandler;
    #[async_trait]
    impl Handler<Value> for SlowHandler {
        fn init_state(&mut self, _state: Value) {}
        async fn handle(
            &mut self,
            _ctx: &ExecutionContext,
            current: &EvalStateResult<Value>,
            _interaction: &ContractInteraction,
        ) -> FoldResult<HandlerResult<Value>> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(HandlerResult::Ok { state: current.state.clone(), result: None, gas_used: None, event: None })
        }
        async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
            Ok(initial_state)
        }
    }

    #[tokio::test]
    async fn interaction_exceeding_the_deadline_is_treated_as_an_exception() {
        let (_, evaluator) = evaluator();
        let mut ctx = eval_ctx(vec![write_interaction(1, 5)], None);
        ctx.handler = Box::new(SlowHandler);
        ctx.options.max_interaction_evaluation_time_seconds = 0;

        let (_, result) = evaluator.eval(ctx).await.unwrap();

        assert_eq!(result.validity.get("i1"), Some(&false));
    }

    struct RecordingProgress(Arc<std::sync::Mutex<Vec<(usize, usize)>>>);
    impl ProgressReporter for RecordingProgress {
        fn on_interaction_evaluated(&self, _contract_tx_id: &str, _interaction_id: &str, index: usize, total: usize) {
            self.0.lock().unwrap().push((index, total));
        }
    }

    #[tokio::test]
    async fn progress_is_reported_after_each_interaction() {
        let (_, evaluator) = evaluator();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut ctx = eval_ctx(vec![write_interaction(1, 5), write_interaction(2, 3)], None);
        ctx.progress = Some(Arc::new(RecordingProgress(seen.clone())));

        evaluator.eval(ctx).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![(0, 2), (1, 2)]);
    }
}

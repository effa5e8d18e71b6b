//! Executor factory (spec §4.6): blacklist/allowlist checks, plugin
//! selection by `contract_type`, compile/instantiate, and a compiled-module
//! cache keyed by `src_tx_id` so contracts sharing one source reuse the
//! same compiled template.
//!
//! Grounded on `neo-vm`'s script-cache pattern (compile once, execute many
//! times against fresh engine instances).

use crate::host::HostCapabilities;
use crate::options::EvaluationOptions;
use crate::verifiers::{ContractBlacklist, EvmSignatureVerifier, ProgressReporter, SourceAllowlist, VrfVerifier};
use crate::Handler;
use async_trait::async_trait;
use dashmap::DashMap;
use foldrunner_core::{ContractDefinition, ContractErrorSubtype, ContractType, FoldError, FoldResult, Source};
use std::collections::HashMap;
use std::sync::Arc;

/// Optional capabilities wired into the evaluator (spec §9 "Pluggable
/// verifiers"). Each is discovered by presence, not by name lookup at
/// runtime — callers assemble this struct once at startup.
#[derive(Clone, Default)]
pub struct EvaluatorDeps {
    pub blacklist: Option<Arc<dyn ContractBlacklist>>,
    pub allowlist: Option<Arc<dyn SourceAllowlist>>,
    pub vrf_verifier: Option<Arc<dyn VrfVerifier>>,
    pub evm_verifier: Option<Arc<dyn EvmSignatureVerifier>>,
    pub progress: Option<Arc<dyn ProgressReporter>>,
}

/// A compiled, immutable template for one source blob. Produces fresh
/// `Handler` instances bound to a given host-capability set; the template
/// itself holds no per-contract state.
pub trait CompiledModule<S>: Send + Sync {
    fn instantiate(&self, host: Arc<dyn HostCapabilities>) -> Box<dyn Handler<S>>;
}

/// Compiles source text/bytes of one `ContractType` into a `CompiledModule`.
/// Concrete sandbox backends (a JS VM, a WASM runtime) implement this;
/// none is bundled here (spec §1 Non-goals: "no concrete sandbox plugin").
#[async_trait]
pub trait SandboxPlugin<S>: Send + Sync {
    fn contract_type(&self) -> ContractType;
    async fn compile(&self, src: &Source) -> FoldResult<Arc<dyn CompiledModule<S>>>;
}

#[async_trait]
pub trait ExecutorFactory<S>: Send + Sync
where
    S: Send + Sync,
{
    async fn create(
        &self,
        definition: &ContractDefinition,
        opts: &EvaluationOptions,
        host: Arc<dyn HostCapabilities>,
    ) -> FoldResult<Box<dyn Handler<S>>>;

    /// The optional capabilities this factory was built with (spec §9
    /// "Pluggable verifiers"). Callers that need to reach the VRF/EVM
    /// verifiers or the progress reporter from outside `create` (the
    /// evaluator's fold loop) go through here rather than threading them
    /// in separately. Default empty for factories with no such deps.
    fn deps(&self) -> EvaluatorDeps {
        EvaluatorDeps::default()
    }
}

/// Default `ExecutorFactory`: runs the blacklist/allowlist checks from
/// spec §4.6, then delegates compilation to the registered plugin for the
/// definition's `contract_type`, memoizing compiled modules by
/// `src_tx_id`.
pub struct CachingExecutorFactory<S> {
    plugins: HashMap<ContractType, Arc<dyn SandboxPlugin<S>>>,
    compiled: DashMap<String, Arc<dyn CompiledModule<S>>>,
    deps: EvaluatorDeps,
}

impl<S> CachingExecutorFactory<S> {
    pub fn new(deps: EvaluatorDeps) -> Self {
        Self { plugins: HashMap::new(), compiled: DashMap::new(), deps }
    }

    pub fn register_plugin(&mut self, plugin: Arc<dyn SandboxPlugin<S>>) {
        self.plugins.insert(plugin.contract_type(), plugin);
    }
}

#[async_trait]
impl<S> ExecutorFactory<S> for CachingExecutorFactory<S>
where
    S: Send + Sync,
{
    async fn create(
        &self,
        definition: &ContractDefinition,
        _opts: &EvaluationOptions,
        host: Arc<dyn HostCapabilities>,
    ) -> FoldResult<Box<dyn Handler<S>>> {
        if let Some(blacklist) = &self.deps.blacklist {
            if blacklist.is_blacklisted(&definition.tx_id) {
                return Err(FoldError::contract_with_subtype(
                    format!("contract {} is blacklisted", definition.tx_id),
                    ContractErrorSubtype::BlacklistedSkip,
                ));
            }
        }
        if let Some(allowlist) = &self.deps.allowlist {
            if !allowlist.is_allowed(&definition.src_tx_id) {
                return Err(FoldError::contract_with_subtype(
                    format!("source {} is not on the allowlist", definition.src_tx_id),
                    ContractErrorSubtype::NonWhitelistedSource,
                ));
            }
        }

        let plugin = self
            .plugins
            .get(&definition.contract_type)
            .ok_or_else(|| FoldError::protocol(format!("no sandbox plugin registered for {:?}", definition.contract_type)))?;

        // Not perfectly race-free under concurrent compiles of the same
        // brand-new src_tx_id (two callers may both compile once), but
        // compilation is idempotent and the cache converges on one entry.
        let compiled = match self.compiled.get(&definition.src_tx_id) {
            Some(entry) => entry.clone(),
            None => {
                let module = plugin.compile(&definition.src).await?;
                self.compiled.insert(definition.src_tx_id.clone(), module.clone());
                module
            }
        };

        Ok(compiled.instantiate(host))
    }

    fn deps(&self) -> EvaluatorDeps {
        self.deps.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{ContractInteraction, ExecutionContext, HandlerResult};
    use foldrunner_core::EvalStateResult;
    use serde_json::Value;

    struct DenyAllBlacklist;
    impl ContractBlacklist for DenyAllBlacklist {
        fn is_blacklisted(&self, _contract_tx_id: &str) -> bool {
            true
        }
    }

    struct NoopHandler;
    #[async_trait]
    impl Handler<Value> for NoopHandler {
        fn init_state(&mut self, _state: Value) {}
        async fn handle(
            &mut self,
            _ctx: &ExecutionContext,
            current: &EvalStateResult<Value>,
            _interaction: &ContractInteraction,
        ) -> FoldResult<HandlerResult<Value>> {
            Ok(HandlerResult::Ok { state: current.state.clone(), result: None, gas_used: None, event: None })
        }
        async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
            Ok(initial_state)
        }
    }

    struct NoopModule;
    impl CompiledModule<Value> for NoopModule {
        fn instantiate(&self, _host: Arc<dyn HostCapabilities>) -> Box<dyn Handler<Value>> {
            Box::new(NoopHandler)
        }
    }

    struct NoopPlugin;
    #[async_trait]
    impl SandboxPlugin<Value> for NoopPlugin {
        fn contract_type(&self) -> ContractType {
            ContractType::Js
        }
        async fn compile(&self, _src: &Source) -> FoldResult<Arc<dyn CompiledModule<Value>>> {
            Ok(Arc::new(NoopModule))
        }
    }

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

    fn definition() -> ContractDefinition {
        ContractDefinition {
            tx_id: "c1".into(),
            src_tx_id: "s1".into(),
            src: Source::Text("contract".into()),
            init_state: Value::Null,
            owner: "owner".into(),
            min_fee: None,
            manifest: None,
            contract_type: ContractType::Js,
            wasm_language: None,
            metadata: None,
            testnet: false,
        }
    }

    #[tokio::test]
    async fn blacklisted_contract_is_rejected() {
        let deps = EvaluatorDeps { blacklist: Some(Arc::new(DenyAllBlacklist)), ..Default::default() };
        let mut factory = CachingExecutorFactory::<Value>::new(deps);
        factory.register_plugin(Arc::new(NoopPlugin));

        let err = factory
            .create(&definition(), &EvaluationOptions::default(), Arc::new(NullHost))
            .await
            .unwrap_err();
        match err {
            FoldError::Contract { subtype: Some(ContractErrorSubtype::BlacklistedSkip), .. } => {}
            other => panic!("expected blacklisted-skip, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn compiled_module_is_reused_across_calls() {
        let mut factory = CachingExecutorFactory::<Value>::new(EvaluatorDeps::default());
        factory.register_plugin(Arc::new(NoopPlugin));

        factory.create(&definition(), &EvaluationOptions::default(), Arc::new(NullHost)).await.unwrap();
        factory.create(&definition(), &EvaluationOptions::default(), Arc::new(NullHost)).await.unwrap();
        assert_eq!(factory.compiled.len(), 1);
    }
}

//! A failing interaction loader must surface as a fatal `FoldError::Network`
//! at the `Contract` boundary, never as a partial/invalid fold result.

use async_trait::async_trait;
use foldrunner_cache::MemorySortKeyCache;
use foldrunner_cli::demo;
use foldrunner_core::{CancellationToken, FoldError, Interaction, SortKey};
use foldrunner_eval::{CacheableStateEvaluator, Contract, EvaluatorHost, InteractionState};
use foldrunner_loader::{InteractionLoader, LoadOptions, LoaderError, LoaderResult};
use foldrunner_sandbox::{CachingExecutorFactory, EvaluationOptions, EvaluatorDeps, ExecutorFactory, HostCapabilities};
use serde_json::Value;
use std::sync::Arc;

struct AlwaysFailsLoader;

#[async_trait]
impl InteractionLoader for AlwaysFailsLoader {
    async fn load(
        &self,
        _contract: &str,
        _from_sort_key: Option<&SortKey>,
        _to_sort_key: Option<&SortKey>,
        _opts: &LoadOptions,
    ) -> LoaderResult<Vec<Interaction>> {
        Err(LoaderError::HttpStatus { status: 503, body: "gateway unavailable".into() })
    }
}

#[tokio::test]
async fn loader_failure_surfaces_as_a_network_error() {
    let cache = Arc::new(MemorySortKeyCache::new());
    let scratchpad = Arc::new(InteractionState::new(cache.clone()));
    let evaluator = Arc::new(CacheableStateEvaluator::new(cache, scratchpad.clone()));

    let mut factory = CachingExecutorFactory::<Value>::new(EvaluatorDeps::default());
    factory.register_plugin(Arc::new(demo::DemoSandboxPlugin));
    let executor_factory: Arc<dyn ExecutorFactory<Value>> = Arc::new(factory);
    let lookup: foldrunner_eval::ContractLookup<Value> = Arc::new(|_: &str| None);
    let host: Arc<dyn HostCapabilities> = Arc::new(EvaluatorHost::new(scratchpad, lookup));

    let contract = Contract::new(
        demo::DEMO_CONTRACT_TX_ID,
        Arc::new(demo::DemoDefinitionLoader),
        Arc::new(AlwaysFailsLoader),
        executor_factory,
        evaluator,
        host,
        EvaluationOptions::default(),
    );

    let err = contract.read_state(None, Vec::new(), CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, FoldError::Network { .. }), "expected a network error, got {err:?}");
}

//! End-to-end tests driving the demo token ledger through the real
//! evaluator stack (cache, scratchpad, executor factory, contract facade),
//! covering the empty-history and token-transfer scenarios.

use foldrunner_cache::MemorySortKeyCache;
use foldrunner_cli::demo;
use foldrunner_core::{CancellationToken, SortKey};
use foldrunner_eval::{CacheableStateEvaluator, Contract, EvaluatorHost, EvolveModifier, InteractionState};
use foldrunner_sandbox::{CachingExecutorFactory, EvaluationOptions, EvaluatorDeps, ExecutorFactory, HostCapabilities};
use serde_json::{json, Value};
use std::sync::Arc;

fn build_contract() -> Contract<Value> {
    let cache = Arc::new(MemorySortKeyCache::new());
    let scratchpad = Arc::new(InteractionState::new(cache.clone()));
    let evaluator = Arc::new(CacheableStateEvaluator::new(cache, scratchpad.clone()).with_modifier(Box::new(EvolveModifier)));

    let mut factory = CachingExecutorFactory::<Value>::new(EvaluatorDeps::default());
    factory.register_plugin(Arc::new(demo::DemoSandboxPlugin));
    let executor_factory: Arc<dyn ExecutorFactory<Value>> = Arc::new(factory);
    let lookup: foldrunner_eval::ContractLookup<Value> = Arc::new(|_: &str| None);
    let host: Arc<dyn HostCapabilities> = Arc::new(EvaluatorHost::new(scratchpad, lookup));

    Contract::new(
        demo::DEMO_CONTRACT_TX_ID,
        Arc::new(demo::DemoDefinitionLoader),
        Arc::new(demo::DemoInteractionLoader),
        executor_factory,
        evaluator,
        host,
        EvaluationOptions::default(),
    )
}

#[tokio::test]
async fn read_state_folds_mint_and_transfers() {
    let contract = build_contract();
    let (_, result) = contract.read_state(None, Vec::new(), CancellationToken::new()).await.unwrap();

    assert_eq!(result.state["balances"]["alice"], json!(70));
    assert_eq!(result.state["balances"]["bob"], json!(20));
    assert_eq!(result.state["balances"]["carol"], json!(10));
    assert_eq!(result.validity.values().filter(|v| **v).count(), 3);
}

#[tokio::test]
async fn read_state_at_an_earlier_sort_key_stops_early() {
    let contract = build_contract();
    let cutoff = SortKey::new(2, 30_000, "demoblock2");
    let (sort_key, result) = contract.read_state(Some(cutoff.clone()), Vec::new(), CancellationToken::new()).await.unwrap();

    assert_eq!(sort_key, cutoff);
    assert_eq!(result.state["balances"]["alice"], json!(70));
    assert_eq!(result.state["balances"]["bob"], json!(30));
    assert!(result.state["balances"].get("carol").is_none(), "carol's transfer hasn't happened yet");
}

#[tokio::test]
async fn view_state_does_not_persist_the_dry_transfer() {
    let contract = build_contract();
    contract.read_state(None, Vec::new(), CancellationToken::new()).await.unwrap();

    let dry_input = json!({"function": "transfer", "from": "alice", "to": "dave", "amount": 5});
    let dry = contract.view_state(dry_input, "alice").await.unwrap();
    match dry {
        foldrunner_eval::InteractionResult::Ok { state, .. } => {
            assert_eq!(state["balances"]["dave"], json!(5));
        }
        other => panic!("expected Ok, got {other:?}"),
    }

    let (_, persisted) = contract.read_state(None, Vec::new(), CancellationToken::new()).await.unwrap();
    assert!(persisted.state["balances"].get("dave").is_none(), "dry runs must never persist");
}

#[tokio::test]
async fn view_state_surfaces_a_known_business_error_without_failing() {
    let contract = build_contract();
    let input = json!({"function": "transfer", "from": "carol", "to": "alice", "amount": 1_000_000});
    let result = contract.view_state(input, "carol").await.unwrap();
    match result {
        foldrunner_eval::InteractionResult::Error { error_message } => {
            assert!(error_message.contains("insufficient balance"));
        }
        other => panic!("expected a known error, got {other:?}"),
    }
}

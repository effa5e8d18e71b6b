//! In-memory demo wiring (spec §1 Non-goals: no concrete sandbox plugin, no
//! network client beyond the loader's own gateway). This module stands in
//! for both so `foldrunner` has something to run against without a live
//! gateway: a fixed token-ledger contract with a handful of baked-in
//! transfer interactions.

use async_trait::async_trait;
use foldrunner_core::definition::Source;
use foldrunner_core::interaction::BlockInfo;
use foldrunner_core::{
    ConfirmationStatus, ContractDefinition, ContractType, EvalStateResult, FoldResult, Interaction, SortKey, Tag,
};
use foldrunner_loader::{DefinitionLoader, InteractionLoader, LoadOptions, LoaderResult};
use foldrunner_sandbox::{
    CompiledModule, ContractInteraction, ExecutionContext, Handler, HandlerResult, HostCapabilities, SandboxPlugin,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub const DEMO_CONTRACT_TX_ID: &str = "demo-ledger";
const DEMO_SRC_TX_ID: &str = "demo-ledger-src";

/// Always resolves to the one baked-in token ledger, ignoring
/// `forced_src_tx_id` (the demo has only one source to evolve to or from).
pub struct DemoDefinitionLoader;

#[async_trait]
impl DefinitionLoader for DemoDefinitionLoader {
    async fn load(&self, contract_tx_id: &str, _forced_src_tx_id: Option<&str>) -> LoaderResult<ContractDefinition> {
        Ok(ContractDefinition {
            tx_id: contract_tx_id.to_string(),
            src_tx_id: DEMO_SRC_TX_ID.to_string(),
            src: Source::Text("/* demo token ledger, interpreted by DemoLedgerHandler */".into()),
            init_state: json!({"balances": {}}),
            owner: "demo-owner".into(),
            min_fee: None,
            manifest: None,
            contract_type: ContractType::Js,
            wasm_language: None,
            metadata: None,
            testnet: true,
        })
    }
}

/// Serves a fixed, ascending sequence of `transfer` interactions, filtered
/// to the requested `(from, to]` range the way a real gateway would be.
pub struct DemoInteractionLoader;

impl DemoInteractionLoader {
    fn all_interactions() -> Vec<Interaction> {
        vec![
            transfer(1, "mint", "alice", 100),
            transfer(2, "alice", "bob", 30),
            transfer(3, "bob", "carol", 10),
        ]
    }
}

#[async_trait]
impl InteractionLoader for DemoInteractionLoader {
    async fn load(
        &self,
        _contract: &str,
        from_sort_key: Option<&SortKey>,
        to_sort_key: Option<&SortKey>,
        _opts: &LoadOptions,
    ) -> LoaderResult<Vec<Interaction>> {
        Ok(Self::all_interactions()
            .into_iter()
            .filter(|i| from_sort_key.map_or(true, |from| i.sort_key.as_ref().is_some_and(|k| k > from)))
            .filter(|i| to_sort_key.map_or(true, |to| i.sort_key.as_ref().is_some_and(|k| k <= to)))
            .collect())
    }
}

fn transfer(height: u64, from: &str, to: &str, amount: i64) -> Interaction {
    let input = json!({"function": "transfer", "from": from, "to": to, "amount": amount});
    Interaction {
        id: format!("demo-tx-{height}"),
        sort_key: Some(SortKey::new(height, height * 15_000, &format!("demoblock{height}"))),
        block: BlockInfo { height, id: format!("demoblock{height}"), timestamp: height * 15_000 },
        owner_address: from.to_string(),
        tags: vec![Tag::new("Input", input.to_string())],
        confirmation_status: Some(ConfirmationStatus::Confirmed),
        dry: false,
        vrf: None,
    }
}

/// Lets `transfer`/`mint` "guest code" run natively instead of through a
/// real JS/WASM interpreter, mirroring what spec §1 excludes: the handler
/// boundary is real, only the sandboxed execution behind it is stubbed.
pub struct DemoLedgerHandler;

#[async_trait]
impl Handler<Value> for DemoLedgerHandler {
    fn init_state(&mut self, _state: Value) {}

    async fn handle(
        &mut self,
        _ctx: &ExecutionContext,
        current: &EvalStateResult<Value>,
        interaction: &ContractInteraction,
    ) -> FoldResult<HandlerResult<Value>> {
        let function = interaction.input.get("function").and_then(Value::as_str);
        if function != Some("transfer") {
            return Ok(HandlerResult::Error { error_message: format!("unknown function {function:?}") });
        }

        let (Some(from), Some(to), Some(amount)) = (
            interaction.input.get("from").and_then(Value::as_str),
            interaction.input.get("to").and_then(Value::as_str),
            interaction.input.get("amount").and_then(Value::as_i64),
        ) else {
            return Ok(HandlerResult::Error { error_message: "transfer requires from/to/amount".into() });
        };

        let mut balances = current.state.get("balances").cloned().unwrap_or_else(|| json!({}));
        let map = balances.as_object_mut().expect("balances is always an object");

        if from != "mint" {
            let balance = map.get(from).and_then(Value::as_i64).unwrap_or(0);
            if balance < amount {
                return Ok(HandlerResult::Error { error_message: format!("{from} has insufficient balance") });
            }
            map.insert(from.to_string(), json!(balance - amount));
        }

        let credited = map.get(to).and_then(Value::as_i64).unwrap_or(0);
        map.insert(to.to_string(), json!(credited + amount));

        Ok(HandlerResult::Ok { state: json!({"balances": balances}), result: None, gas_used: None, event: None })
    }

    async fn maybe_call_state_constructor(&mut self, initial_state: Value, _ctx: &ExecutionContext) -> FoldResult<Value> {
        Ok(initial_state)
    }
}

pub struct DemoCompiledModule;

impl CompiledModule<Value> for DemoCompiledModule {
    fn instantiate(&self, _host: Arc<dyn HostCapabilities>) -> Box<dyn Handler<Value>> {
        Box::new(DemoLedgerHandler)
    }
}

pub struct DemoSandboxPlugin;

#[async_trait]
impl SandboxPlugin<Value> for DemoSandboxPlugin {
    fn contract_type(&self) -> ContractType {
        ContractType::Js
    }

    async fn compile(&self, _src: &Source) -> FoldResult<Arc<dyn CompiledModule<Value>>> {
        Ok(Arc::new(DemoCompiledModule))
    }
}

//! Thin CLI wiring an in-memory demo loader + sandbox and driving
//! `readState`/`viewState` from the command line, grounded on the
//! teacher's `neo-cli/src/main.rs` (clap `Parser`, `anyhow` at the binary
//! boundary, `tracing-subscriber` init once at startup).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use foldrunner_cache::MemorySortKeyCache;
use foldrunner_cli::{config, demo};
use foldrunner_core::{CancellationToken, SortKey};
use foldrunner_eval::{CacheableStateEvaluator, Contract, EvaluatorHost, EvolveModifier, InteractionState};
use foldrunner_sandbox::{CachingExecutorFactory, EvaluatorDeps, ExecutorFactory, HostCapabilities};
use serde_json::Value;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "foldrunner", about = "Runs the demo token-ledger contract through the fold evaluator")]
struct Cli {
    /// Path to an `EvaluationOptions` TOML file; defaults are used if omitted.
    #[arg(long, value_name = "PATH")]
    options: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Folds the demo ledger's interaction history and prints the resulting state.
    ReadState {
        /// Stop folding at this sort-key (format: height,block_ms,hash). Defaults to the latest.
        #[arg(long)]
        sort_key: Option<String>,
    },
    /// Runs a dry `transfer` against the current state without persisting anything.
    ViewState {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))).init();

    let cli = Cli::parse();
    let options = config::load_options(cli.options.as_deref())?;

    let cache = Arc::new(MemorySortKeyCache::new());
    let scratchpad = Arc::new(InteractionState::new(cache.clone()));
    let evaluator = Arc::new(CacheableStateEvaluator::new(cache, scratchpad.clone()).with_modifier(Box::new(EvolveModifier)));

    let mut factory = CachingExecutorFactory::<Value>::new(EvaluatorDeps::default());
    factory.register_plugin(Arc::new(demo::DemoSandboxPlugin));
    let executor_factory: Arc<dyn ExecutorFactory<Value>> = Arc::new(factory);

    // The demo only ever runs one contract, so internal writes/host reads
    // to a sibling contract have nothing to resolve to.
    let lookup: foldrunner_eval::ContractLookup<Value> = Arc::new(|_: &str| None);
    let host: Arc<dyn HostCapabilities> = Arc::new(EvaluatorHost::new(scratchpad, lookup));

    let contract = Contract::new(
        demo::DEMO_CONTRACT_TX_ID,
        Arc::new(demo::DemoDefinitionLoader),
        Arc::new(demo::DemoInteractionLoader),
        executor_factory,
        evaluator,
        host,
        options,
    );

    match cli.command {
        Command::ReadState { sort_key } => {
            let requested = sort_key.as_deref().map(parse_sort_key).transpose()?;
            let (sort_key, result) = contract
                .read_state(requested, Vec::new(), CancellationToken::new())
                .await
                .context("readState failed")?;
            println!("sort_key: {}", sort_key.as_str());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::ViewState { from, to, amount } => {
            let input = serde_json::json!({"function": "transfer", "from": from, "to": to, "amount": amount});
            let result = contract.view_state(input, &from).await.context("viewState failed")?;
            println!("{}", serde_json::to_string_pretty(&to_json(result))?);
        }
    }

    Ok(())
}

fn to_json(result: foldrunner_eval::InteractionResult<Value>) -> Value {
    match result {
        foldrunner_eval::InteractionResult::Ok { state, result } => {
            serde_json::json!({"status": "ok", "state": state, "result": result})
        }
        foldrunner_eval::InteractionResult::Error { error_message } => {
            serde_json::json!({"status": "error", "error_message": error_message})
        }
        foldrunner_eval::InteractionResult::Exception { error_message } => {
            serde_json::json!({"status": "exception", "error_message": error_message})
        }
    }
}

/// Parses `height,block_ms,hash` into a `SortKey`, matching the raw
/// constructor fields (spec §3); there is no canonical single-string
/// parse on the wire, so this is a CLI-only convenience.
fn parse_sort_key(raw: &str) -> Result<SortKey> {
    let mut parts = raw.splitn(3, ',');
    let height: u64 = parts.next().context("missing height")?.parse().context("invalid height")?;
    let block_ms: u64 = parts.next().context("missing block_ms")?.parse().context("invalid block_ms")?;
    let hash = parts.next().context("missing hash")?;
    Ok(SortKey::new(height, block_ms, hash))
}

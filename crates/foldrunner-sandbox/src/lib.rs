//! Host-guest sandbox boundary (spec §4.5–§4.6): the evaluator depends
//! only on the traits declared here, never on a concrete VM.

pub mod executor;
pub mod handler;
pub mod host;
pub mod options;
pub mod verifiers;

pub use executor::{CachingExecutorFactory, CompiledModule, EvaluatorDeps, ExecutorFactory, SandboxPlugin};
pub use handler::{ContractInteraction, ExecutionContext, Handler, HandlerResult, InteractionType};
pub use host::HostCapabilities;
pub use options::{EvaluationOptions, StackTraceOptions, UnsafeClientPolicy};
pub use verifiers::{ContractBlacklist, EvmSignatureVerifier, ProgressReporter, SourceAllowlist, VrfVerifier};

//! Fold evaluation: the scratchpad, the state evaluator, execution-context
//! modifiers, and the `Contract` facade that ties loaders and the sandbox
//! together into the user-facing `readState`/`viewState`/`dryWrite` API
//! (spec §4.7-§4.9).

pub mod contract;
pub mod evaluator;
pub mod host;
pub mod modifiers;
pub mod scratchpad;

pub use contract::{Contract, ContractRegistryResolver, InteractionResult};
pub use evaluator::{
    BaseStateEvaluator, CacheableStateEvaluator, CallStack, EvalContext, InternalWriteResolver, StateEvaluator,
};
pub use host::{ContractLookup, EvaluatorHost};
pub use modifiers::{EvolveModifier, ExecutionContextModifier};
pub use scratchpad::InteractionState;

//! `EvaluationOptions` (spec §6), grounded on `neo-config::NodeConfig`'s
//! plain-struct-plus-serde style with an explicit `Default` impl.

use foldrunner_core::WasmSerializationFormat;
use serde::{Deserialize, Serialize};

/// How an "unsafe client" reference inside a guest contract is handled
/// (spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsafeClientPolicy {
    Allow,
    Skip,
    Throw,
}

impl Default for UnsafeClientPolicy {
    fn default() -> Self {
        Self::Throw
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackTraceOptions {
    pub save_state: bool,
}

impl Default for StackTraceOptions {
    fn default() -> Self {
        Self { save_state: false }
    }
}

/// Evaluation configuration (spec §6). Every field defaults to the value
/// documented there.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    pub ignore_exceptions: bool,
    pub update_cache_for_each_interaction: bool,
    pub internal_writes: bool,
    pub max_call_depth: u32,
    pub max_interaction_evaluation_time_seconds: u64,
    pub unsafe_client: UnsafeClientPolicy,
    pub allow_big_int: bool,
    /// Flush the scratchpad to cache every N-th interaction in addition to
    /// the normal commit points. `-1` disables the extra flush.
    pub cache_every_n_interactions: i64,
    pub whitelist_sources: Vec<String>,
    pub wasm_serialization_format: WasmSerializationFormat,
    pub use_constructor: bool,
    pub use_kv_storage: bool,
    pub stack_trace: StackTraceOptions,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            ignore_exceptions: true,
            update_cache_for_each_interaction: false,
            internal_writes: false,
            max_call_depth: 7,
            max_interaction_evaluation_time_seconds: 60,
            unsafe_client: UnsafeClientPolicy::Throw,
            allow_big_int: false,
            cache_every_n_interactions: -1,
            whitelist_sources: Vec::new(),
            wasm_serialization_format: WasmSerializationFormat::default(),
            use_constructor: false,
            use_kv_storage: false,
            stack_trace: StackTraceOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = EvaluationOptions::default();
        assert!(opts.ignore_exceptions);
        assert!(!opts.internal_writes);
        assert_eq!(opts.max_call_depth, 7);
        assert_eq!(opts.max_interaction_evaluation_time_seconds, 60);
        assert_eq!(opts.unsafe_client, UnsafeClientPolicy::Throw);
        assert_eq!(opts.cache_every_n_interactions, -1);
        assert!(opts.whitelist_sources.is_empty());
    }

    #[test]
    fn deserializes_partial_toml_with_defaults_filled_in() {
        let opts: EvaluationOptions = toml_like_from_json(r#"{"internal_writes": true}"#);
        assert!(opts.internal_writes);
        assert!(opts.ignore_exceptions, "unspecified fields keep their default");
    }

    fn toml_like_from_json(s: &str) -> EvaluationOptions {
        serde_json::from_str(s).unwrap()
    }
}

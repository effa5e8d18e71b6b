//! Pluggable capabilities (spec §9 "Design Notes — Pluggable verifiers"):
//! discovered by name, silently absent, invoked only when an incoming
//! interaction demands them.

use async_trait::async_trait;
use foldrunner_core::Interaction;

#[async_trait]
pub trait VrfVerifier: Send + Sync {
    async fn verify(&self, interaction: &Interaction, proof: &str) -> bool;
}

#[async_trait]
pub trait EvmSignatureVerifier: Send + Sync {
    async fn verify(&self, interaction: &Interaction) -> bool;
}

pub trait ContractBlacklist: Send + Sync {
    fn is_blacklisted(&self, contract_tx_id: &str) -> bool;
}

pub trait SourceAllowlist: Send + Sync {
    fn is_allowed(&self, src_tx_id: &str) -> bool;
}

/// Per-interaction progress surface (spec §2), driven by the evaluator as
/// the fold advances.
pub trait ProgressReporter: Send + Sync {
    fn on_interaction_evaluated(&self, contract_tx_id: &str, interaction_id: &str, index: usize, total: usize);
}

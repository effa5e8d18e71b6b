//! `ExecutionContextModifier`s (spec §4.7 step 10, §9 "Dynamic guest
//! dispatch"): hooks run after every interaction that may rebind the
//! active definition. The only built-in is `EvolveModifier`, which detects
//! the protocol's source-swap tag; the list is otherwise extensible.

use foldrunner_core::interaction::find_tag;
use foldrunner_core::Interaction;

pub trait ExecutionContextModifier: Send + Sync {
    /// Returns a new `src_tx_id` to rebind to, if this modifier recognizes
    /// something in `interaction` that warrants it.
    fn detect_rebind(&self, interaction: &Interaction) -> Option<String>;
}

/// Detects the `Evolve` tag (spec §3 "Lifecycle", §4.7 step 10): a
/// protocol-recognized interaction that swaps a contract's active source
/// from its sort-key onward.
pub struct EvolveModifier;

impl ExecutionContextModifier for EvolveModifier {
    fn detect_rebind(&self, interaction: &Interaction) -> Option<String> {
        find_tag(&interaction.tags, "Evolve").map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldrunner_core::interaction::BlockInfo;
    use foldrunner_core::Tag;

    fn interaction_with_tags(tags: Vec<Tag>) -> Interaction {
        Interaction {
            id: "i1".into(),
            sort_key: None,
            block: BlockInfo { height: 1, id: "b1".into(), timestamp: 0 },
            owner_address: "owner".into(),
            tags,
            confirmation_status: None,
            dry: false,
            vrf: None,
        }
    }

    #[test]
    fn detects_evolve_tag() {
        let modifier = EvolveModifier;
        let interaction = interaction_with_tags(vec![Tag::new("Evolve", "src2")]);
        assert_eq!(modifier.detect_rebind(&interaction), Some("src2".to_string()));
    }

    #[test]
    fn ignores_interactions_without_evolve_tag() {
        let modifier = EvolveModifier;
        let interaction = interaction_with_tags(vec![Tag::new("Input", "{}")]);
        assert_eq!(modifier.detect_rebind(&interaction), None);
    }
}

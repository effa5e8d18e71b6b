//! Interaction data model (spec §3).

use crate::sortkey::{SortKey, SortKeyed};
use serde::{Deserialize, Serialize};

/// A single (name, value) tag pair attached to an interaction transaction.
/// Both sides are arbitrary bytes on the network; most tags used by this
/// engine are UTF-8, so a `String` is used for ergonomics and callers that
/// need raw bytes can keep them base64/hex-encoded in the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Finds the value of the first tag with the given name, matching how the
/// protocol treats repeated tag names (first occurrence wins).
pub fn find_tag<'a>(tags: &'a [Tag], name: &str) -> Option<&'a str> {
    tags.iter().find(|t| t.name == name).map(|t| t.value.as_str())
}

/// Block header fields carried by an interaction (spec §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub height: u64,
    pub id: String,
    /// Milliseconds since epoch.
    pub timestamp: u64,
}

/// Network-reported judgment over whether an interaction is final
/// (spec §3, §4.7 step 8, GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Unknown,
    Confirmed,
    Corrupted,
    Forked,
}

/// An immutable interaction record (spec §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<SortKey>,
    pub block: BlockInfo,
    pub owner_address: String,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<ConfirmationStatus>,
    pub dry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
}

impl Interaction {
    /// Cacheability gate from spec §4.7 step 8: confirmed-or-unknown-status
    /// and not dry.
    pub fn is_cacheable(&self) -> bool {
        !self.dry
            && matches!(
                self.confirmation_status,
                None | Some(ConfirmationStatus::Confirmed)
            )
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        find_tag(&self.tags, name)
    }

    /// Builds a synthetic dry interaction for `viewState`/`dryWrite`
    /// (spec §4.9, GLOSSARY "Dry interaction"). It is never persisted to
    /// cache (`is_cacheable` is always false for it).
    pub fn synthetic_dry(id: impl Into<String>, owner_address: impl Into<String>, tags: Vec<Tag>, at: SortKey, block: BlockInfo) -> Self {
        Interaction {
            id: id.into(),
            sort_key: Some(at),
            block,
            owner_address: owner_address.into(),
            tags,
            confirmation_status: None,
            dry: true,
            vrf: None,
        }
    }
}

impl SortKeyed for Interaction {
    fn sort_key(&self) -> Option<&SortKey> {
        self.sort_key.as_ref()
    }

    fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = Some(key);
    }

    fn derive_sort_key(&self) -> SortKey {
        SortKey::derive(self.block.height, &self.block.id, &self.id)
    }

    fn tie_break_key(&self) -> (u64, String, String) {
        (self.block.height, self.block.id.clone(), self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> BlockInfo {
        BlockInfo { height: 10, id: "blockid".into(), timestamp: 1_700_000_000_000 }
    }

    #[test]
    fn cacheability_gate_rejects_dry_and_non_confirmed() {
        let mut i = Interaction {
            id: "a".into(),
            sort_key: None,
            block: sample_block(),
            owner_address: "owner".into(),
            tags: vec![],
            confirmation_status: None,
            dry: false,
            vrf: None,
        };
        assert!(i.is_cacheable());

        i.dry = true;
        assert!(!i.is_cacheable());

        i.dry = false;
        i.confirmation_status = Some(ConfirmationStatus::Corrupted);
        assert!(!i.is_cacheable());

        i.confirmation_status = Some(ConfirmationStatus::Confirmed);
        assert!(i.is_cacheable());
    }

    #[test]
    fn tag_lookup_finds_first_match() {
        let tags = vec![Tag::new("Input", "{}"), Tag::new("Input", "other")];
        assert_eq!(find_tag(&tags, "Input"), Some("{}"));
        assert_eq!(find_tag(&tags, "Missing"), None);
    }
}

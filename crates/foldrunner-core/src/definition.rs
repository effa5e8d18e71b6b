//! Contract definition data model (spec §3, §4.4, §6).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `application/javascript` or `application/wasm` (spec §4.4, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Js,
    Wasm,
}

impl ContractType {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            "application/javascript" => Some(Self::Js),
            "application/wasm" => Some(Self::Wasm),
            _ => None,
        }
    }
}

/// Either inline UTF-8 source text or a binary module (spec §3 `Source`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Text(String),
    Binary(Vec<u8>),
}

/// Serialization format negotiated with the guest for the host/guest
/// bridge (spec §6 `wasm_serialization_format`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasmSerializationFormat {
    Json,
    Msgpack,
}

impl Default for WasmSerializationFormat {
    fn default() -> Self {
        Self::Json
    }
}

/// `{tx_id, src_tx_id, src, init_state, owner, ...}` (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDefinition {
    pub tx_id: String,
    pub src_tx_id: String,
    pub src: Source,
    pub init_state: Value,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ContractManifest>,
    pub contract_type: ContractType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub testnet: bool,
}

impl ContractDefinition {
    /// Returns a copy of this definition with its `src_tx_id`/`src` swapped
    /// to the evolved source, used by the Evolve modifier (spec §4.7 step
    /// 10). The rest of the definition (owner, manifest, init_state) is
    /// untouched, since evolution only replaces source.
    pub fn with_evolved_source(&self, new_src_tx_id: String, new_src: Source, new_contract_type: ContractType) -> Self {
        Self {
            src_tx_id: new_src_tx_id,
            src: new_src,
            contract_type: new_contract_type,
            ..self.clone()
        }
    }
}

/// JSON blob with evaluation options, as referenced by spec §3/§6. Only the
/// fields this engine interprets directly are modeled; the rest of the
/// manifest round-trips through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContractManifest {
    #[serde(default)]
    pub use_constructor: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_maps_to_contract_type() {
        assert_eq!(ContractType::from_content_type("application/javascript"), Some(ContractType::Js));
        assert_eq!(ContractType::from_content_type("application/wasm"), Some(ContractType::Wasm));
        assert_eq!(ContractType::from_content_type("text/plain"), None);
    }

    #[test]
    fn evolved_source_keeps_owner_and_manifest() {
        let def = ContractDefinition {
            tx_id: "c1".into(),
            src_tx_id: "s1".into(),
            src: Source::Text("old".into()),
            init_state: serde_json::json!({}),
            owner: "owner".into(),
            min_fee: None,
            manifest: Some(ContractManifest::default()),
            contract_type: ContractType::Js,
            wasm_language: None,
            metadata: None,
            testnet: false,
        };
        let evolved = def.with_evolved_source("s2".into(), Source::Text("new".into()), ContractType::Js);
        assert_eq!(evolved.src_tx_id, "s2");
        assert_eq!(evolved.owner, "owner");
        assert!(evolved.manifest.is_some());
    }
}

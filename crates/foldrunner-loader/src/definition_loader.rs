//! `DefinitionLoader` (spec §4.4): resolves `(source, init_state,
//! metadata)` for a contract id by reading its transaction and referenced
//! source transaction tags.

use crate::error::{LoaderError, LoaderResult};
use async_trait::async_trait;
use foldrunner_core::definition::{ContractManifest, WasmSerializationFormat};
use foldrunner_core::interaction::find_tag;
use foldrunner_core::{ContractDefinition, ContractType, Source, Tag};

/// Narrow seam over "fetch this transaction's tags/data/owner" so
/// `DefinitionLoader` implementations do not depend on a concrete network
/// client (the underlying network's HTTP/GQL client is an external
/// collaborator per spec §1).
#[async_trait]
pub trait TransactionFetcher: Send + Sync {
    async fn fetch_tags(&self, tx_id: &str) -> LoaderResult<Vec<Tag>>;
    async fn fetch_data(&self, tx_id: &str) -> LoaderResult<Vec<u8>>;
    async fn fetch_owner(&self, tx_id: &str) -> LoaderResult<String>;
}

#[async_trait]
pub trait DefinitionLoader: Send + Sync {
    async fn load(&self, contract_tx_id: &str, forced_src_tx_id: Option<&str>) -> LoaderResult<ContractDefinition>;
}

/// The recognized tags from spec §6, resolved in the order documented in
/// spec §4.4.
pub struct StandardDefinitionLoader<F> {
    fetcher: F,
    testnet_mode: bool,
}

impl<F: TransactionFetcher> StandardDefinitionLoader<F> {
    pub fn new(fetcher: F, testnet_mode: bool) -> Self {
        Self { fetcher, testnet_mode }
    }
}

#[async_trait]
impl<F: TransactionFetcher> DefinitionLoader for StandardDefinitionLoader<F> {
    async fn load(&self, contract_tx_id: &str, forced_src_tx_id: Option<&str>) -> LoaderResult<ContractDefinition> {
        let contract_tags = self.fetcher.fetch_tags(contract_tx_id).await?;

        let src_tx_id = match forced_src_tx_id {
            Some(forced) => forced.to_string(),
            None => find_tag(&contract_tags, "Contract-Src")
                .ok_or_else(|| LoaderError::Protocol("missing Contract-Src tag".into()))?
                .to_string(),
        };

        let src_tags = self.fetcher.fetch_tags(&src_tx_id).await?;
        let content_type = find_tag(&src_tags, "Content-Type")
            .ok_or_else(|| LoaderError::Protocol("missing Content-Type tag on source transaction".into()))?;
        let contract_type = ContractType::from_content_type(content_type)
            .ok_or_else(|| LoaderError::Protocol(format!("unsupported content type: {content_type}")))?;

        let src_bytes = self.fetcher.fetch_data(&src_tx_id).await?;
        let src = match contract_type {
            ContractType::Js => Source::Text(
                String::from_utf8(src_bytes)
                    .map_err(|e| LoaderError::Protocol(format!("source is not valid UTF-8: {e}")))?,
            ),
            ContractType::Wasm => Source::Binary(src_bytes),
        };

        let init_state = self.resolve_init_state(contract_tx_id, &contract_tags).await?;

        let manifest = find_tag(&contract_tags, "Manifest")
            .map(serde_json::from_str::<ContractManifest>)
            .transpose()?;
        let min_fee = find_tag(&contract_tags, "Min-Fee").and_then(|v| v.parse::<u64>().ok());
        let wasm_language = find_tag(&contract_tags, "Wasm-Lang").map(str::to_string);
        let metadata = find_tag(&contract_tags, "Wasm-Meta")
            .map(serde_json::from_str)
            .transpose()?;
        let _wasm_format: WasmSerializationFormat = Default::default(); // negotiated by EvaluationOptions, not per-definition

        let testnet_tag = find_tag(&contract_tags, "Testnet").map(|v| v == "true").unwrap_or(false);
        if testnet_tag != self.testnet_mode {
            return Err(LoaderError::Protocol(format!(
                "environment mismatch: contract has Testnet={testnet_tag}, engine is in {} mode",
                if self.testnet_mode { "testnet" } else { "mainnet" }
            )));
        }

        let owner = self.fetcher.fetch_owner(contract_tx_id).await?;

        Ok(ContractDefinition {
            tx_id: contract_tx_id.to_string(),
            src_tx_id,
            src,
            init_state,
            owner,
            min_fee,
            manifest,
            contract_type,
            wasm_language,
            metadata,
            testnet: testnet_tag,
        })
    }
}

impl<F: TransactionFetcher> StandardDefinitionLoader<F> {
    /// `Init-State` inline JSON, falling back to `Init-State-TX`, falling
    /// back to the contract transaction's own data (spec §4.4).
    async fn resolve_init_state(&self, contract_tx_id: &str, contract_tags: &[Tag]) -> LoaderResult<serde_json::Value> {
        if let Some(inline) = find_tag(contract_tags, "Init-State") {
            return Ok(serde_json::from_str(inline)?);
        }
        if let Some(init_state_tx) = find_tag(contract_tags, "Init-State-TX") {
            let bytes = self.fetcher.fetch_data(init_state_tx).await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }
        let bytes = self.fetcher.fetch_data(contract_tx_id).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFetcher {
        tags: Mutex<HashMap<String, Vec<Tag>>>,
        data: Mutex<HashMap<String, Vec<u8>>>,
        owners: Mutex<HashMap<String, String>>,
    }

    impl MockFetcher {
        fn with_tx(self, id: &str, tags: Vec<Tag>, data: Vec<u8>, owner: &str) -> Self {
            self.tags.lock().unwrap().insert(id.to_string(), tags);
            self.data.lock().unwrap().insert(id.to_string(), data);
            self.owners.lock().unwrap().insert(id.to_string(), owner.to_string());
            self
        }
    }

    #[async_trait]
    impl TransactionFetcher for MockFetcher {
        async fn fetch_tags(&self, tx_id: &str) -> LoaderResult<Vec<Tag>> {
            self.tags
                .lock()
                .unwrap()
                .get(tx_id)
                .cloned()
                .ok_or_else(|| LoaderError::Protocol(format!("unknown tx {tx_id}")))
        }
        async fn fetch_data(&self, tx_id: &str) -> LoaderResult<Vec<u8>> {
            self.data
                .lock()
                .unwrap()
                .get(tx_id)
                .cloned()
                .ok_or_else(|| LoaderError::Protocol(format!("unknown tx {tx_id}")))
        }
        async fn fetch_owner(&self, tx_id: &str) -> LoaderResult<String> {
            self.owners
                .lock()
                .unwrap()
                .get(tx_id)
                .cloned()
                .ok_or_else(|| LoaderError::Protocol(format!("unknown tx {tx_id}")))
        }
    }

    #[tokio::test]
    async fn resolves_inline_init_state_and_js_source() {
        let fetcher = MockFetcher::default()
            .with_tx(
                "contract1",
                vec![
                    Tag::new("Contract-Src", "src1"),
                    Tag::new("Init-State", r#"{"counter":1}"#),
                ],
                b"unused".to_vec(),
                "owner1",
            )
            .with_tx("src1", vec![Tag::new("Content-Type", "application/javascript")], b"export function handle(){}".to_vec(), "owner1");

        let loader = StandardDefinitionLoader::new(fetcher, false);
        let def = loader.load("contract1", None).await.unwrap();
        assert_eq!(def.src_tx_id, "src1");
        assert_eq!(def.init_state, serde_json::json!({"counter": 1}));
        assert_eq!(def.contract_type, ContractType::Js);
        assert_eq!(def.owner, "owner1");
    }

    #[tokio::test]
    async fn falls_back_to_contract_tx_data_when_no_init_state_tags() {
        let fetcher = MockFetcher::default()
            .with_tx("contract1", vec![Tag::new("Contract-Src", "src1")], br#"{"counter":5}"#.to_vec(), "owner1")
            .with_tx("src1", vec![Tag::new("Content-Type", "application/javascript")], b"code".to_vec(), "owner1");

        let loader = StandardDefinitionLoader::new(fetcher, false);
        let def = loader.load("contract1", None).await.unwrap();
        assert_eq!(def.init_state, serde_json::json!({"counter": 5}));
    }

    #[tokio::test]
    async fn rejects_unsupported_content_type() {
        let fetcher = MockFetcher::default()
            .with_tx("contract1", vec![Tag::new("Contract-Src", "src1"), Tag::new("Init-State", "{}")], vec![], "owner1")
            .with_tx("src1", vec![Tag::new("Content-Type", "text/plain")], b"nope".to_vec(), "owner1");

        let loader = StandardDefinitionLoader::new(fetcher, false);
        let err = loader.load("contract1", None).await.unwrap_err();
        assert!(matches!(err, LoaderError::Protocol(_)));
    }

    #[tokio::test]
    async fn testnet_mismatch_is_fatal() {
        let fetcher = MockFetcher::default()
            .with_tx(
                "contract1",
                vec![Tag::new("Contract-Src", "src1"), Tag::new("Init-State", "{}"), Tag::new("Testnet", "true")],
                vec![],
                "owner1",
            )
            .with_tx("src1", vec![Tag::new("Content-Type", "application/javascript")], b"code".to_vec(), "owner1");

        let loader = StandardDefinitionLoader::new(fetcher, false);
        let err = loader.load("contract1", None).await.unwrap_err();
        assert!(matches!(err, LoaderError::Protocol(_)));
    }

    #[tokio::test]
    async fn forced_src_tx_id_overrides_tag() {
        let fetcher = MockFetcher::default()
            .with_tx("contract1", vec![Tag::new("Contract-Src", "src1"), Tag::new("Init-State", "{}")], vec![], "owner1")
            .with_tx("src1", vec![Tag::new("Content-Type", "application/javascript")], b"old".to_vec(), "owner1")
            .with_tx("src2", vec![Tag::new("Content-Type", "application/javascript")], b"new".to_vec(), "owner1");

        let loader = StandardDefinitionLoader::new(fetcher, false);
        let def = loader.load("contract1", Some("src2")).await.unwrap();
        assert_eq!(def.src_tx_id, "src2");
        assert_eq!(def.src, Source::Text("new".to_string()));
    }
}

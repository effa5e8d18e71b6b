//! Native GQL loader (spec §4.3): queries a content-addressed-network GQL
//! endpoint and fills `sort_key` locally from `(block.height, block.id,
//! id)`, since the GQL schema this queries does not carry a pre-computed
//! sort-key field.

use crate::error::{LoaderError, LoaderResult};
use crate::interaction_loader::{InteractionLoader, LoadOptions, RetryPolicy};
use async_trait::async_trait;
use foldrunner_core::interaction::{BlockInfo, Tag};
use foldrunner_core::{Interaction, SortKey, SortKeyed};
use serde::{Deserialize, Serialize};
use serde_json::json;

const QUERY: &str = r#"
query Transactions($contract: String!, $after: String) {
  transactions(tags: [{ name: "Contract", values: [$contract] }], after: $after, first: 100) {
    pageInfo { hasNextPage }
    edges {
      cursor
      node {
        id
        owner { address }
        block { height id timestamp }
        tags { name value }
      }
    }
  }
}
"#;

pub struct NativeGqlLoader {
    client: reqwest::Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl NativeGqlLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into(), retry: RetryPolicy::default() }
    }

    async fn fetch_page(&self, contract: &str, after: Option<&str>) -> LoaderResult<GqlTransactions> {
        let body = json!({
            "query": QUERY,
            "variables": { "contract": contract, "after": after },
        });
        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(LoaderError::HttpStatus { status, body: text });
        }
        let envelope: GqlEnvelope = response.json().await?;
        envelope
            .data
            .map(|d| d.transactions)
            .ok_or_else(|| LoaderError::Protocol("GQL response missing data.transactions".into()))
    }
}

#[async_trait]
impl InteractionLoader for NativeGqlLoader {
    async fn load(
        &self,
        contract: &str,
        from_sort_key: Option<&SortKey>,
        to_sort_key: Option<&SortKey>,
        opts: &LoadOptions,
    ) -> LoaderResult<Vec<Interaction>> {
        let mut all = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let page = self
                .retry
                .run(&opts.cancellation, || self.fetch_page(contract, cursor.as_deref()))
                .await?;
            let has_next = page.page_info.has_next_page;
            for edge in page.edges {
                let mut interaction = edge.node.into_interaction();
                if interaction.sort_key().is_none() {
                    let key = interaction.derive_sort_key();
                    interaction.set_sort_key(key);
                }
                cursor = Some(edge.cursor);
                all.push(interaction);
            }
            if !has_next {
                break;
            }
        }
        all.retain(|i| {
            let key = i.sort_key.as_ref().expect("sort-key filled in above");
            from_sort_key.map_or(true, |from| key > from) && to_sort_key.map_or(true, |to| key <= to)
        });
        Ok(all)
    }
}

#[derive(Debug, Deserialize)]
struct GqlEnvelope {
    #[serde(default)]
    data: Option<GqlData>,
}

#[derive(Debug, Deserialize)]
struct GqlData {
    transactions: GqlTransactions,
}

#[derive(Debug, Deserialize)]
struct GqlTransactions {
    #[serde(rename = "pageInfo")]
    page_info: GqlPageInfo,
    edges: Vec<GqlEdge>,
}

#[derive(Debug, Deserialize)]
struct GqlPageInfo {
    #[serde(rename = "hasNextPage")]
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
struct GqlEdge {
    cursor: String,
    node: GqlNode,
}

#[derive(Debug, Deserialize, Serialize)]
struct GqlNode {
    id: String,
    owner: GqlOwner,
    block: BlockInfo,
    #[serde(default)]
    tags: Vec<Tag>,
}

#[derive(Debug, Deserialize, Serialize)]
struct GqlOwner {
    address: String,
}

impl GqlNode {
    fn into_interaction(self) -> Interaction {
        Interaction {
            id: self.id,
            sort_key: None,
            block: self.block,
            owner_address: self.owner.address,
            tags: self.tags,
            confirmation_status: None,
            dry: false,
            vrf: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn single_page_fills_sort_key_locally() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "data": {
                "transactions": {
                    "pageInfo": {"hasNextPage": false},
                    "edges": [{
                        "cursor": "c1",
                        "node": {
                            "id": "i1",
                            "owner": {"address": "owner"},
                            "block": {"height": 7, "id": "blk7", "timestamp": 1000},
                            "tags": []
                        }
                    }]
                }
            }
        });
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let loader = NativeGqlLoader::new(server.url());
        let result = loader.load("c1", None, None, &LoadOptions::default()).await.unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].sort_key.is_some());
    }
}

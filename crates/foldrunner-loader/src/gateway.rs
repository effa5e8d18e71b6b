//! Paginated HTTP gateway loader (spec §4.3, §6), grounded on
//! `neo-rpc-client::client::RpcClient`'s `reqwest`-based client with
//! bounded retry.

use crate::error::{LoaderError, LoaderResult};
use crate::interaction_loader::{
    ConfirmationStatusFilter, InteractionLoader, LoadOptions, RetryPolicy, SourceFilter,
};
use async_trait::async_trait;
use foldrunner_core::interaction::{BlockInfo, ConfirmationStatus, Tag};
use foldrunner_core::{Interaction, SortKey};
use serde::Deserialize;
use std::time::Duration;

pub struct GatewayLoader {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl GatewayLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client builder should not fail with only a timeout set");
        Self { client, base_url: base_url.into(), retry: RetryPolicy::default() }
    }

    fn page_url(&self, contract: &str, from: Option<&SortKey>, to: Option<&SortKey>, page: u32, opts: &LoadOptions) -> String {
        let mut url = format!(
            "{}/gateway/interactions-sort-key?contractId={}&page={}&minimize=true",
            self.base_url.trim_end_matches('/'),
            contract,
            page
        );
        if let Some(from) = from {
            url.push_str("&from=");
            url.push_str(from.as_str());
        }
        if let Some(to) = to {
            url.push_str("&to=");
            url.push_str(to.as_str());
        }
        match opts.confirmation_status {
            ConfirmationStatusFilter::Any => {}
            ConfirmationStatusFilter::Confirmed => url.push_str("&confirmationStatus=confirmed"),
            ConfirmationStatusFilter::NotCorrupted => url.push_str("&confirmationStatus=not_corrupted"),
        }
        match opts.source {
            SourceFilter::Any => {}
            SourceFilter::Native => url.push_str("&source=native"),
            SourceFilter::Sequencer => url.push_str("&source=sequencer"),
        }
        url
    }

    async fn fetch_page(&self, url: &str) -> LoaderResult<GatewayPage> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LoaderError::HttpStatus { status, body });
        }
        Ok(response.json::<GatewayPage>().await?)
    }
}

#[async_trait]
impl InteractionLoader for GatewayLoader {
    async fn load(
        &self,
        contract: &str,
        from_sort_key: Option<&SortKey>,
        to_sort_key: Option<&SortKey>,
        opts: &LoadOptions,
    ) -> LoaderResult<Vec<Interaction>> {
        let mut all = Vec::new();
        let mut page = 1u32;
        loop {
            let url = self.page_url(contract, from_sort_key, to_sort_key, page, opts);
            let gateway_page = self
                .retry
                .run(&opts.cancellation, || self.fetch_page(&url))
                .await?;
            let total_pages = gateway_page.paging.pages;
            for envelope in gateway_page.interactions {
                all.push(envelope.into_interaction()?);
            }
            if page >= total_pages || total_pages == 0 {
                break;
            }
            page += 1;
        }
        Ok(all)
    }
}

#[derive(Debug, Deserialize)]
struct GatewayPage {
    paging: GatewayPaging,
    interactions: Vec<GatewayEnvelope>,
}

#[derive(Debug, Deserialize)]
struct GatewayPaging {
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct GatewayEnvelope {
    interaction: GatewayInteraction,
    #[serde(default)]
    status: Option<String>,
}

impl GatewayEnvelope {
    fn into_interaction(self) -> LoaderResult<Interaction> {
        let confirmation_status = match self.status.as_deref() {
            Some("confirmed") => Some(ConfirmationStatus::Confirmed),
            Some("corrupted") => Some(ConfirmationStatus::Corrupted),
            Some("forked") => Some(ConfirmationStatus::Forked),
            Some("unknown") | None => None,
            Some(other) => return Err(LoaderError::Protocol(format!("unknown confirmation status: {other}"))),
        };
        Ok(Interaction {
            id: self.interaction.id,
            sort_key: self.interaction.sort_key.map(SortKey::from_raw),
            block: self.interaction.block,
            owner_address: self.interaction.owner_address,
            tags: self.interaction.tags,
            confirmation_status,
            dry: self.interaction.dry.unwrap_or(false),
            vrf: self.interaction.vrf,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GatewayInteraction {
    id: String,
    #[serde(default)]
    sort_key: Option<String>,
    block: BlockInfo,
    owner_address: String,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    dry: Option<bool>,
    #[serde(default)]
    vrf: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction_loader::LoadOptions;
    use serde_json::json;

    #[tokio::test]
    async fn single_page_response_is_parsed() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "paging": {"pages": 1},
            "interactions": [{
                "interaction": {
                    "id": "i1",
                    "block": {"height": 1, "id": "b1", "timestamp": 1000},
                    "owner_address": "owner",
                    "tags": [{"name": "Input", "value": "{}"}],
                    "dry": false
                },
                "status": "confirmed"
            }]
        });
        let _m = server
            .mock("GET", mockito::Matcher::Regex(r"^/gateway/interactions-sort-key.*".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let loader = GatewayLoader::new(server.url());
        let result = loader
            .load("contract1", None, None, &LoadOptions::default())
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "i1");
        assert_eq!(result[0].confirmation_status, Some(ConfirmationStatus::Confirmed));
    }

    #[tokio::test]
    async fn multi_page_responses_are_merged() {
        let mut server = mockito::Server::new_async().await;
        let page1 = json!({"paging": {"pages": 2}, "interactions": [
            {"interaction": {"id": "i1", "block": {"height": 1, "id": "b1", "timestamp": 1000}, "owner_address": "o", "tags": [], "dry": false}, "status": "confirmed"}
        ]});
        let page2 = json!({"paging": {"pages": 2}, "interactions": [
            {"interaction": {"id": "i2", "block": {"height": 2, "id": "b2", "timestamp": 2000}, "owner_address": "o", "tags": [], "dry": false}, "status": "confirmed"}
        ]});
        let _m1 = server
            .mock("GET", mockito::Matcher::Regex(r"^/gateway/interactions-sort-key\?contractId=c1&page=1.*".into()))
            .with_status(200)
            .with_body(page1.to_string())
            .create_async()
            .await;
        let _m2 = server
            .mock("GET", mockito::Matcher::Regex(r"^/gateway/interactions-sort-key\?contractId=c1&page=2.*".into()))
            .with_status(200)
            .with_body(page2.to_string())
            .create_async()
            .await;

        let loader = GatewayLoader::new(server.url());
        let result = loader.load("c1", None, None, &LoadOptions::default()).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "i1");
        assert_eq!(result[1].id, "i2");
    }

    #[tokio::test]
    async fn non_2xx_status_fails_with_no_partial_results() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", mockito::Matcher::Regex(r"^/gateway/interactions-sort-key.*".into()))
            .with_status(504)
            .with_body("gateway timeout")
            .create_async()
            .await;

        let loader = GatewayLoader::new(server.url());
        let err = loader.load("c1", None, None, &LoadOptions::default()).await.unwrap_err();
        match err {
            LoaderError::HttpStatus { status, .. } => assert_eq!(status, 504),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }
}

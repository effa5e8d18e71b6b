//! `InteractionLoader` (spec §4.3): `load(contract, from?, to?, opts) ->
//! list<Interaction>` returning interactions in `(from, to]`.

use crate::error::{LoaderError, LoaderResult};
use async_trait::async_trait;
use foldrunner_core::{CancellationToken, Interaction, SortKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `{confirmed | not_corrupted | any}` (spec §4.3, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmationStatusFilter {
    Confirmed,
    NotCorrupted,
    Any,
}

/// `{native | sequencer | any}` (spec §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    Native,
    Sequencer,
    Any,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub confirmation_status: ConfirmationStatusFilter,
    pub source: SourceFilter,
    pub cancellation: CancellationToken,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            confirmation_status: ConfirmationStatusFilter::Any,
            source: SourceFilter::Any,
            cancellation: CancellationToken::new(),
        }
    }
}

/// The loader contract from spec §4.3. Implementations fetch interactions
/// in `(from_sort_key, to_sort_key]` — exclusive of `from`, inclusive of
/// `to` — for one contract, failing the whole call on any page error
/// (partial results are never returned, per spec §4.3 Failure).
#[async_trait]
pub trait InteractionLoader: Send + Sync {
    async fn load(
        &self,
        contract: &str,
        from_sort_key: Option<&SortKey>,
        to_sort_key: Option<&SortKey>,
        opts: &LoadOptions,
    ) -> LoaderResult<Vec<Interaction>>;
}

/// Shared retry policy for the two HTTP-backed loaders, grounded on
/// `neo-rpc-client::RpcClient::call_raw`'s bounded-retry-with-backoff loop.
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 3, base_delay: Duration::from_millis(200) }
    }
}

impl RetryPolicy {
    pub(crate) async fn run<T, F, Fut>(&self, cancellation: &CancellationToken, mut op: F) -> LoaderResult<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = LoaderResult<T>>,
    {
        let mut attempt = 0;
        loop {
            if cancellation.is_cancelled() {
                return Err(LoaderError::Cancelled);
            }
            match op().await {
                Ok(v) => return Ok(v),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::debug!(attempt, "retrying loader request after error: {err}");
                    tokio::time::sleep(self.base_delay * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

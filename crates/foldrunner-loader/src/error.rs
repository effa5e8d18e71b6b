//! Loader error type, grounded on `neo-rpc-client::error::RpcError`'s
//! `thiserror` enum with `#[from]` conversions for `reqwest`/`serde_json`.

use foldrunner_core::FoldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("http {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    Protocol(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("evaluation cancelled")]
    Cancelled,
}

impl LoaderError {
    /// Whether a retry is worth attempting (grounded on
    /// `RpcError::is_retryable` from the teacher's rpc client).
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<LoaderError> for FoldError {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::Cancelled => FoldError::Abort,
            other => FoldError::network(other.to_string()),
        }
    }
}

pub type LoaderResult<T> = std::result::Result<T, LoaderError>;

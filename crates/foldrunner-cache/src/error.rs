//! Cache error type, grounded on the narrow-enum-plus-`#[from]` style used
//! throughout the workspace (see `foldrunner-core::error::FoldError`).

use foldrunner_core::FoldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<rocksdb::Error> for CacheError {
    fn from(err: rocksdb::Error) -> Self {
        CacheError::Backend(err.to_string())
    }
}

impl From<CacheError> for FoldError {
    fn from(err: CacheError) -> Self {
        FoldError::protocol(format!("cache error: {err}"))
    }
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;

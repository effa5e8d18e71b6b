//! Data model, sort-key ordering, and canonical serialization shared by
//! every other foldrunner crate.
//!
//! This crate has no knowledge of networks, sandboxes, or caches: it only
//! defines the vocabulary (spec §3) that the rest of the workspace folds,
//! loads, and caches.

pub mod canonical;
pub mod cancellation;
pub mod definition;
pub mod error;
pub mod eval_result;
pub mod interaction;
pub mod sortkey;

pub use cancellation::CancellationToken;
pub use definition::{ContractDefinition, ContractManifest, ContractType, Source, WasmSerializationFormat};
pub use error::{ContractErrorSubtype, FoldError, FoldResult};
pub use eval_result::{EvalStateResult, Event};
pub use interaction::{BlockInfo, ConfirmationStatus, Interaction, Tag};
pub use sortkey::{compare, sort, SortKey, SortKeyed};

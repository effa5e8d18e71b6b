//! Contract definition and interaction stream loading (spec §4.3, §4.4).

pub mod caching;
pub mod definition_loader;
pub mod error;
pub mod gateway;
pub mod interaction_loader;
pub mod native_gql;

pub use caching::CachingInteractionLoader;
pub use definition_loader::{DefinitionLoader, StandardDefinitionLoader, TransactionFetcher};
pub use error::{LoaderError, LoaderResult};
pub use gateway::GatewayLoader;
pub use interaction_loader::{ConfirmationStatusFilter, InteractionLoader, LoadOptions, SourceFilter};
pub use native_gql::NativeGqlLoader;

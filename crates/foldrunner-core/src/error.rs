//! Crate-wide error type for foldrunner-core.
//!
//! Downstream crates (`foldrunner-cache`, `foldrunner-loader`,
//! `foldrunner-sandbox`, `foldrunner-eval`) define their own narrower error
//! enums and convert into [`FoldError`] at their public boundary, mirroring
//! the way the error kinds in spec §7 compose (`Network`, `Contract`,
//! `Exception`, `Abort`, `Protocol`).

use thiserror::Error;

/// The five error kinds from spec §7, plus the plumbing needed to carry a
/// message and, where useful, a structured cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// Loader could not retrieve interactions or a definition. Always fatal
    /// to the enclosing `readState` root.
    #[error("network error: {message}")]
    Network {
        /// Human-readable description, e.g. including the gateway status code.
        message: String,
    },

    /// A guest-raised business rejection (`handle` returned `error {}`).
    /// Optionally carries a subtype used to decide stop-after-evolve vs.
    /// merely-invalid (spec §4.10).
    #[error("contract error{}: {message}", subtype.as_ref().map(|s| format!(" ({s})")).unwrap_or_default())]
    Contract {
        message: String,
        subtype: Option<ContractErrorSubtype>,
    },

    /// An unexpected guest failure (`handle` returned `exception`, or the
    /// per-interaction timeout elapsed).
    #[error("exception: {message}")]
    Exception { message: String },

    /// Cooperative cancellation fired mid-evaluation.
    #[error("evaluation aborted")]
    Abort,

    /// Malformed data or an environment mismatch (unsupported content
    /// type, testnet/mainnet mismatch, unparsable tag).
    #[error("protocol error: {message}")]
    Protocol { message: String },
}

/// Subtypes of [`FoldError::Contract`] that change stop-after-evolve
/// behavior, per spec §4.10 and the Open Question in spec §9(c).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractErrorSubtype {
    /// `unsafe_client = skip` tripped on this interaction.
    UnsafeClientSkip,
    /// The `__init` constructor failed.
    Constructor,
    /// The contract (or its current source) is blacklisted.
    BlacklistedSkip,
    /// The interaction's `src_tx_id` is not in the configured allowlist.
    NonWhitelistedSource,
}

impl ContractErrorSubtype {
    /// Whether this subtype halts further fold progress at the root after
    /// applying pending modifiers (evolve), per spec §4.10.
    pub fn stops_after_evolve(self) -> bool {
        matches!(
            self,
            Self::UnsafeClientSkip
                | Self::Constructor
                | Self::BlacklistedSkip
                | Self::NonWhitelistedSource
        )
    }
}

impl std::fmt::Display for ContractErrorSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::UnsafeClientSkip => "unsafe-client-skip",
            Self::Constructor => "constructor",
            Self::BlacklistedSkip => "blacklisted-skip",
            Self::NonWhitelistedSource => "non-whitelisted-source",
        };
        f.write_str(s)
    }
}

impl FoldError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network { message: message.into() }
    }

    pub fn contract<S: Into<String>>(message: S) -> Self {
        Self::Contract { message: message.into(), subtype: None }
    }

    pub fn contract_with_subtype<S: Into<String>>(message: S, subtype: ContractErrorSubtype) -> Self {
        Self::Contract { message: message.into(), subtype: Some(subtype) }
    }

    pub fn exception<S: Into<String>>(message: S) -> Self {
        Self::Exception { message: message.into() }
    }

    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol { message: message.into() }
    }

    /// True for errors classified as "fatal" in spec §7 (`Network`, `Abort`,
    /// `Protocol`, and `Exception` when the caller has not set
    /// `ignore_exceptions`).
    pub fn is_fatal(&self, ignore_exceptions: bool) -> bool {
        match self {
            Self::Network { .. } | Self::Abort | Self::Protocol { .. } => true,
            Self::Exception { .. } => !ignore_exceptions,
            Self::Contract { .. } => false,
        }
    }
}

/// Result alias used throughout the foldrunner workspace.
pub type FoldResult<T> = std::result::Result<T, FoldError>;

impl From<serde_json::Error> for FoldError {
    fn from(err: serde_json::Error) -> Self {
        Self::protocol(format!("json codec error: {err}"))
    }
}

impl From<rmp_serde::encode::Error> for FoldError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        Self::protocol(format!("msgpack encode error: {err}"))
    }
}

impl From<rmp_serde::decode::Error> for FoldError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        Self::protocol(format!("msgpack decode error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_subtypes_stop_after_evolve() {
        assert!(ContractErrorSubtype::UnsafeClientSkip.stops_after_evolve());
        assert!(ContractErrorSubtype::Constructor.stops_after_evolve());
        assert!(ContractErrorSubtype::BlacklistedSkip.stops_after_evolve());
        assert!(ContractErrorSubtype::NonWhitelistedSource.stops_after_evolve());
    }

    #[test]
    fn fatality_classification() {
        assert!(FoldError::network("x").is_fatal(true));
        assert!(FoldError::Abort.is_fatal(true));
        assert!(FoldError::protocol("x").is_fatal(false));
        assert!(!FoldError::contract("x").is_fatal(false));
        assert!(FoldError::exception("x").is_fatal(false));
        assert!(!FoldError::exception("x").is_fatal(true));
    }
}

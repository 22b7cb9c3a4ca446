//! Error types for the tickers crate.
//!
//! The normalization surface itself never fails: malformed tickers degrade to
//! [`TickerFormat::Unknown`](crate::models::TickerFormat::Unknown) or
//! [`TickerFormat::Invalid`](crate::models::TickerFormat::Invalid). Errors are
//! only produced when loading a custom exchange catalog and by the strict
//! [`try_normalize_ticker`](crate::resolver::try_normalize_ticker) entry point.

use thiserror::Error;

/// Which reverse index an alias collision was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    Ibkr,
    Reuters,
}

impl std::fmt::Display for AliasKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ibkr => f.write_str("IBKR"),
            Self::Reuters => f.write_str("Reuters"),
        }
    }
}

/// Errors that can occur while building exchange tables or strictly parsing tickers.
#[derive(Error, Debug)]
pub enum TickerError {
    /// The exchange catalog is not valid JSON or does not match the schema.
    #[error("Invalid exchange catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Two catalog entries declare the same Yahoo suffix.
    #[error("Duplicate exchange suffix: {0}")]
    DuplicateSuffix(String),

    /// An IBKR or Reuters code is claimed by more than one suffix.
    /// Reverse lookups must resolve to exactly one exchange.
    #[error("{kind} alias {alias} maps to both {first} and {second}")]
    DuplicateAlias {
        /// The index the collision occurred in
        kind: AliasKind,
        /// The colliding code
        alias: String,
        /// Suffix that registered the alias first
        first: String,
        /// Suffix that tried to register it again
        second: String,
    },

    /// The ticker contains characters outside `[A-Za-z0-9.:-]`.
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    /// The ticker has an exchange designator that no table entry knows.
    #[error("Unknown exchange for ticker: {0}")]
    UnknownExchange(String),
}

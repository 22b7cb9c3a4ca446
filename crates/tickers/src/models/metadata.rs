use serde::{Deserialize, Serialize};

use super::exchange::ExchangeRecord;

/// Country reported for tickers whose exchange could not be resolved.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Exchange name reported for tickers whose exchange could not be resolved.
pub const UNKNOWN_EXCHANGE: &str = "Unknown";

/// Country assumed for suffix-less tickers.
pub const US_COUNTRY: &str = "United States";

/// Exchange name reported for suffix-less tickers.
pub const ASSUMED_US_EXCHANGE: &str = "US Exchange (assumed)";

/// IBKR smart-routing code, used for US listings and as the fallback route.
pub const SMART_ROUTING: &str = "SMART";

/// The spelling a ticker was recognized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickerFormat {
    /// Yahoo-style `SYMBOL.SUFFIX` with a known suffix
    Standard,
    /// Interactive Brokers `SYMBOL:EXCHANGE`
    Ibkr,
    /// Reuters `SYMBOL.EXCH-CC` or `SYMBOL.CODE`
    Reuters,
    /// Bare symbol, assumed US-listed
    Plain,
    /// Has an exchange designator nobody recognizes
    Unknown,
    /// Contains characters that never appear in tickers
    Invalid,
}

impl TickerFormat {
    pub const ALL: [TickerFormat; 6] = [
        Self::Standard,
        Self::Ibkr,
        Self::Reuters,
        Self::Plain,
        Self::Unknown,
        Self::Invalid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Ibkr => "ibkr",
            Self::Reuters => "reuters",
            Self::Plain => "plain",
            Self::Unknown => "unknown",
            Self::Invalid => "invalid",
        }
    }

    /// Whether this format carries resolved exchange metadata.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown | Self::Invalid)
    }
}

impl std::fmt::Display for TickerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata derived for a single ticker.
///
/// Field order is part of the contract: serialization and [`fields`](Self::fields)
/// both yield keys in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerMetadata {
    /// Uppercased input
    pub original: String,
    /// Ticker without exchange designator (e.g., "NOVN")
    pub symbol: String,
    /// Canonical Yahoo suffix (e.g., ".SW"), empty for US or unresolved
    pub exchange_suffix: String,
    pub exchange_name: String,
    pub country: String,
    /// IBKR routing code, empty when unresolved
    pub ibkr_exchange: String,
    pub format: TickerFormat,
}

impl TickerMetadata {
    /// Metadata for a ticker resolved against an exchange record.
    pub(crate) fn resolved(
        original: impl Into<String>,
        symbol: impl Into<String>,
        record: &ExchangeRecord,
        format: TickerFormat,
    ) -> Self {
        Self {
            original: original.into(),
            symbol: symbol.into(),
            exchange_suffix: record.suffix.clone(),
            exchange_name: record.exchange_name.clone(),
            country: record.country.clone(),
            ibkr_exchange: record.ibkr_exchange.clone(),
            format,
        }
    }

    /// Metadata for a bare symbol with no exchange designator.
    pub(crate) fn plain(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            symbol: original.clone(),
            original,
            exchange_suffix: String::new(),
            exchange_name: ASSUMED_US_EXCHANGE.to_string(),
            country: US_COUNTRY.to_string(),
            ibkr_exchange: SMART_ROUTING.to_string(),
            format: TickerFormat::Plain,
        }
    }

    /// Metadata for a ticker whose exchange could not be determined.
    pub(crate) fn unresolved(
        original: impl Into<String>,
        symbol: impl Into<String>,
        format: TickerFormat,
    ) -> Self {
        Self {
            original: original.into(),
            symbol: symbol.into(),
            exchange_suffix: String::new(),
            exchange_name: UNKNOWN_EXCHANGE.to_string(),
            country: UNKNOWN_COUNTRY.to_string(),
            ibkr_exchange: String::new(),
            format,
        }
    }

    /// Key/value view in contract order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("original", &self.original),
            ("symbol", &self.symbol),
            ("exchange_suffix", &self.exchange_suffix),
            ("exchange_name", &self.exchange_name),
            ("country", &self.country),
            ("ibkr_exchange", &self.ibkr_exchange),
            ("format", self.format.as_str()),
        ]
    }

    pub fn is_us(&self) -> bool {
        self.country == US_COUNTRY
    }
}

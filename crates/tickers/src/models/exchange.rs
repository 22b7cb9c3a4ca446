//! Exchange catalog entries.

use serde::{Deserialize, Serialize};

/// One exchange known to the ticker formatter.
///
/// `suffix` is the canonical key. The alias lists feed the reverse indexes
/// used to translate IBKR and Reuters spellings back to the suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    /// Yahoo suffix including the dot (e.g., ".SW"); empty for US listings
    pub suffix: String,

    /// Human-readable exchange name (e.g., "SIX Swiss Exchange")
    pub exchange_name: String,

    /// Country or region (e.g., "Switzerland", "Hong Kong")
    pub country: String,

    /// Primary trading currency (ISO 4217)
    pub currency: String,

    /// IBKR routing code used when formatting `SYMBOL:EXCHANGE`
    pub ibkr_exchange: String,

    /// IBKR codes that resolve to this suffix
    #[serde(default)]
    pub ibkr_aliases: Vec<String>,

    /// Reuters exchange/country codes that resolve to this suffix
    #[serde(default)]
    pub reuters_aliases: Vec<String>,
}

impl ExchangeRecord {
    /// Create a record with no aliases.
    pub fn new(
        suffix: impl Into<String>,
        exchange_name: impl Into<String>,
        country: impl Into<String>,
        currency: impl Into<String>,
        ibkr_exchange: impl Into<String>,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            exchange_name: exchange_name.into(),
            country: country.into(),
            currency: currency.into(),
            ibkr_exchange: ibkr_exchange.into(),
            ibkr_aliases: Vec::new(),
            reuters_aliases: Vec::new(),
        }
    }

    /// Add IBKR codes that resolve to this record.
    pub fn with_ibkr_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ibkr_aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Add Reuters codes that resolve to this record.
    pub fn with_reuters_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reuters_aliases
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    /// US listings carry no suffix.
    pub fn is_domestic(&self) -> bool {
        self.suffix.is_empty()
    }
}

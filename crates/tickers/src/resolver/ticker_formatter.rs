//! Ticker format detection and normalization.
//!
//! Converts Yahoo (`NOVN.SW`), IBKR (`NOVN:SWX`), Reuters (`NOVN.S`,
//! `NOVN.N-CH`) and plain US (`AAPL`) spellings to the canonical Yahoo form
//! and recovers exchange metadata from the [`ExchangeTable`].
//!
//! Every entry point is total: inputs that cannot be classified come back
//! with [`TickerFormat::Unknown`] or [`TickerFormat::Invalid`] rather than an
//! error, so a single bad row never aborts a batch.

use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;

use crate::errors::TickerError;
use crate::models::{ExchangeRecord, TickerFormat, TickerMetadata, SMART_ROUTING};

use super::exchange_registry::ExchangeTable;

/// Separator between symbol and IBKR exchange code.
const IBKR_SEPARATOR: char = ':';

/// Separator between symbol and Yahoo suffix / Reuters code.
const SUFFIX_SEPARATOR: char = '.';

/// Separator between Reuters exchange code and country code.
const REUTERS_COUNTRY_SEPARATOR: char = '-';

/// Share-class separator in suffix-less US tickers (e.g. "BRK-B").
const US_SHARE_CLASS_SEPARATOR: &str = "-";

lazy_static! {
    static ref DEFAULT_FORMATTER: TickerFormatter = TickerFormatter::new();
}

/// Stateless ticker normalizer over an exchange table.
///
/// Cloning is cheap; the table is shared.
#[derive(Debug, Clone)]
pub struct TickerFormatter {
    table: Arc<ExchangeTable>,
}

impl Default for TickerFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerFormatter {
    /// Create a formatter over the built-in exchange table.
    pub fn new() -> Self {
        Self {
            table: ExchangeTable::builtin(),
        }
    }

    /// Create a formatter over a custom exchange table.
    pub fn with_table(table: ExchangeTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &ExchangeTable {
        &self.table
    }

    /// Classify `input` and return its canonical Yahoo form with metadata.
    ///
    /// Detection order, first match wins: invalid characters, IBKR
    /// `SYMBOL:CODE`, Yahoo `SYMBOL.SUFFIX`, Reuters `SYMBOL.CODE` /
    /// `SYMBOL.EXCH-CC`, plain symbol, unknown. A trailing segment that is a
    /// valid Yahoo suffix is never read as a Reuters code.
    pub fn normalize_ticker(&self, input: &str) -> (String, TickerMetadata) {
        let original = input.to_uppercase();

        if input.is_empty() || !input.chars().all(is_ticker_char) {
            debug!("Ticker '{}' contains invalid characters", input);
            let metadata = TickerMetadata::unresolved(original.as_str(), "", TickerFormat::Invalid);
            return (original, metadata);
        }

        if let Some((symbol, code)) = original.split_once(IBKR_SEPARATOR) {
            return self.normalize_ibkr(&original, symbol, code);
        }

        if let Some((symbol, code)) = original.rsplit_once(SUFFIX_SEPARATOR) {
            return self.normalize_dotted(&original, symbol, code);
        }

        (original.clone(), TickerMetadata::plain(original))
    }

    fn normalize_ibkr(&self, original: &str, symbol: &str, code: &str) -> (String, TickerMetadata) {
        let well_formed =
            !symbol.is_empty() && !code.is_empty() && code.chars().all(|c| c.is_ascii_alphabetic());

        match self.table.by_ibkr(code).filter(|_| well_formed) {
            Some(record) => resolved(original, symbol, record, TickerFormat::Ibkr),
            None => unknown(original, symbol),
        }
    }

    fn normalize_dotted(
        &self,
        original: &str,
        symbol: &str,
        code: &str,
    ) -> (String, TickerMetadata) {
        if symbol.is_empty() || code.is_empty() {
            return unknown(original, symbol);
        }

        // Yahoo suffix validity wins over a Reuters alias with the same spelling
        if let Some(record) = self.table.by_suffix(code) {
            let metadata =
                TickerMetadata::resolved(original, symbol, record, TickerFormat::Standard);
            return (original.to_string(), metadata);
        }

        match self.resolve_reuters(code) {
            Some(record) => resolved(original, symbol, record, TickerFormat::Reuters),
            None => unknown(original, symbol),
        }
    }

    /// Resolve a Reuters trailing segment: `EXCH-CC` tries the country code
    /// first, then the exchange code; a bare `CODE` is looked up directly.
    fn resolve_reuters(&self, code: &str) -> Option<&ExchangeRecord> {
        match code.split_once(REUTERS_COUNTRY_SEPARATOR) {
            Some((exchange, country)) => non_empty(country)
                .and_then(|cc| self.table.by_reuters(cc))
                .or_else(|| non_empty(exchange).and_then(|ex| self.table.by_reuters(ex))),
            None => self.table.by_reuters(code),
        }
    }

    /// Canonical Yahoo Finance ticker. Idempotent.
    pub fn to_yfinance(&self, ticker: &str) -> String {
        self.normalize_ticker(ticker).0
    }

    /// IBKR `SYMBOL:EXCHANGE` spelling, routed via `SMART` when unresolved.
    pub fn to_ibkr(&self, ticker: &str) -> String {
        let (normalized, metadata) = self.normalize_ticker(ticker);
        let symbol = if metadata.symbol.is_empty() {
            normalized
        } else {
            metadata.symbol
        };
        let exchange = if metadata.ibkr_exchange.is_empty() {
            SMART_ROUTING
        } else {
            metadata.ibkr_exchange.as_str()
        };
        format!("{}{}{}", symbol, IBKR_SEPARATOR, exchange)
    }

    /// Metadata only, for display and reporting.
    pub fn get_ticker_info(&self, ticker: &str) -> TickerMetadata {
        self.normalize_ticker(ticker).1
    }

    /// `true` unless the ticker resolves to a US listing.
    ///
    /// Unresolved tickers count as international.
    pub fn is_international(&self, ticker: &str) -> bool {
        !self.get_ticker_info(ticker).is_us()
    }

    /// Trading currency of the resolved exchange.
    pub fn get_currency(&self, ticker: &str) -> Option<&str> {
        let metadata = self.get_ticker_info(ticker);
        self.record_for(&metadata).map(|r| r.currency.as_str())
    }

    /// Strict variant of [`normalize_ticker`](Self::normalize_ticker) that
    /// rejects invalid and unresolved tickers.
    pub fn try_normalize_ticker(
        &self,
        ticker: &str,
    ) -> Result<(String, TickerMetadata), TickerError> {
        let (normalized, metadata) = self.normalize_ticker(ticker);
        match metadata.format {
            TickerFormat::Invalid => Err(TickerError::InvalidTicker(metadata.original)),
            TickerFormat::Unknown => Err(TickerError::UnknownExchange(metadata.original)),
            _ => Ok((normalized, metadata)),
        }
    }

    fn record_for(&self, metadata: &TickerMetadata) -> Option<&ExchangeRecord> {
        if !metadata.format.is_resolved() {
            return None;
        }
        if metadata.exchange_suffix.is_empty() {
            self.table.domestic()
        } else {
            self.table.by_suffix(&metadata.exchange_suffix)
        }
    }
}

fn is_ticker_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == SUFFIX_SEPARATOR
        || c == IBKR_SEPARATOR
        || c == REUTERS_COUNTRY_SEPARATOR
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Canonical ticker for a symbol re-homed onto `record`.
///
/// A US listing has no suffix, so any dot left in the symbol would be read
/// as an exchange designator on the next pass. Those dots become the US
/// share-class dash instead (`BRK.B:NYSE` -> `BRK-B`).
fn resolved(
    original: &str,
    symbol: &str,
    record: &ExchangeRecord,
    format: TickerFormat,
) -> (String, TickerMetadata) {
    let symbol = if record.is_domestic() {
        symbol.replace(SUFFIX_SEPARATOR, US_SHARE_CLASS_SEPARATOR)
    } else {
        symbol.to_string()
    };
    let normalized = format!("{}{}", symbol, record.suffix);
    let metadata = TickerMetadata::resolved(original, symbol, record, format);
    (normalized, metadata)
}

fn unknown(original: &str, symbol: &str) -> (String, TickerMetadata) {
    debug!("No exchange match for ticker '{}'", original);
    let metadata = TickerMetadata::unresolved(original, symbol, TickerFormat::Unknown);
    (original.to_string(), metadata)
}

// ── Free functions over the built-in table ───────────────────────────────────

/// See [`TickerFormatter::normalize_ticker`].
pub fn normalize_ticker(ticker: &str) -> (String, TickerMetadata) {
    DEFAULT_FORMATTER.normalize_ticker(ticker)
}

/// See [`TickerFormatter::to_yfinance`].
pub fn to_yfinance(ticker: &str) -> String {
    DEFAULT_FORMATTER.to_yfinance(ticker)
}

/// See [`TickerFormatter::to_ibkr`].
pub fn to_ibkr(ticker: &str) -> String {
    DEFAULT_FORMATTER.to_ibkr(ticker)
}

/// See [`TickerFormatter::get_ticker_info`].
pub fn get_ticker_info(ticker: &str) -> TickerMetadata {
    DEFAULT_FORMATTER.get_ticker_info(ticker)
}

/// See [`TickerFormatter::is_international`].
pub fn is_international(ticker: &str) -> bool {
    DEFAULT_FORMATTER.is_international(ticker)
}

/// See [`TickerFormatter::get_currency`].
pub fn get_currency(ticker: &str) -> Option<&'static str> {
    DEFAULT_FORMATTER.get_currency(ticker)
}

/// See [`TickerFormatter::try_normalize_ticker`].
pub fn try_normalize_ticker(ticker: &str) -> Result<(String, TickerMetadata), TickerError> {
    DEFAULT_FORMATTER.try_normalize_ticker(ticker)
}

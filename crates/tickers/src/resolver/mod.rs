//! Ticker resolution against the exchange metadata table.
//!
//! # Supported spellings
//!
//! ```text
//! ┌──────────┬──────────────────────┬────────────────────┐
//! │ Format   │ Example              │ Canonical          │
//! ├──────────┼──────────────────────┼────────────────────┤
//! │ standard │ NOVN.SW              │ NOVN.SW            │
//! │ ibkr     │ NOVN:SWX             │ NOVN.SW            │
//! │ reuters  │ NOVN.S, NOVN.N-CH    │ NOVN.SW            │
//! │ plain    │ AAPL                 │ AAPL               │
//! │ unknown  │ UNKNOWN.XX           │ UNKNOWN.XX         │
//! │ invalid  │ INVALID@             │ INVALID@           │
//! └──────────┴──────────────────────┴────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use screener_tickers::resolver::{normalize_ticker, to_ibkr};
//! use screener_tickers::models::TickerFormat;
//!
//! let (ticker, meta) = normalize_ticker("NOVN:SWX");
//! assert_eq!(ticker, "NOVN.SW");
//! assert_eq!(meta.country, "Switzerland");
//! assert_eq!(meta.format, TickerFormat::Ibkr);
//!
//! assert_eq!(to_ibkr("NOVN.N-CH"), "NOVN:SWX");
//! ```

mod exchange_registry;
mod ticker_formatter;

pub use exchange_registry::ExchangeTable;
pub use ticker_formatter::{
    get_currency, get_ticker_info, is_international, normalize_ticker, to_ibkr, to_yfinance,
    try_normalize_ticker, TickerFormatter,
};

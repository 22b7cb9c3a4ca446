//! Screener Tickers Crate
//!
//! Ticker normalization and exchange metadata for the screening pipeline.
//!
//! # Overview
//!
//! Listings arrive from scrapers, brokers and data vendors in different
//! spellings. This crate maps them onto one canonical (Yahoo-suffix) form:
//!
//! ```text
//!   NOVN:SWX  (IBKR)   ─┐
//!   NOVN.N-CH (Reuters) ─┼──> TickerFormatter ──> NOVN.SW + TickerMetadata
//!   novn.sw   (Yahoo)  ─┘          │
//!                                  v
//!                           ExchangeTable  (exchanges.json)
//! ```
//!
//! and provides the name helpers used to build news/search queries.
//!
//! # Core Types
//!
//! - [`TickerFormatter`] - Format detection and normalization over an exchange table
//! - [`ExchangeTable`] - Exchange records with IBKR/Reuters reverse indexes
//! - [`ExchangeRecord`] - One exchange (suffix, name, country, currency, IBKR route)
//! - [`TickerMetadata`] - Per-ticker metadata in fixed field order
//! - [`TickerFormat`] - standard | ibkr | reuters | plain | unknown | invalid
//! - [`TickerError`] - Catalog loading and strict-parse errors
//!
//! All functions are pure and never fail on malformed tickers.

pub mod errors;
pub mod models;
pub mod naming;
pub mod resolver;

pub use errors::{AliasKind, TickerError};

pub use models::{ExchangeRecord, TickerFormat, TickerMetadata};

pub use naming::{generate_strict_search_query, normalize_company_name};

pub use resolver::{
    get_currency, get_ticker_info, is_international, normalize_ticker, to_ibkr, to_yfinance,
    try_normalize_ticker, ExchangeTable, TickerFormatter,
};

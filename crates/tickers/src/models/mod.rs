//! Ticker data models
//!
//! - `exchange` - Exchange catalog entry (ExchangeRecord)
//! - `metadata` - Per-ticker derived metadata (TickerMetadata) and the TickerFormat enum

mod exchange;
mod metadata;

pub use exchange::ExchangeRecord;
pub use metadata::{
    TickerFormat, TickerMetadata, ASSUMED_US_EXCHANGE, SMART_ROUTING, UNKNOWN_COUNTRY,
    UNKNOWN_EXCHANGE, US_COUNTRY,
};

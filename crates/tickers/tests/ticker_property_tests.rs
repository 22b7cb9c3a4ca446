//! Property-based tests for ticker normalization.
//!
//! These tests verify invariants that must hold for every ticker spelling,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use screener_tickers::{
    is_international, normalize_ticker, to_ibkr, to_yfinance, ExchangeRecord, ExchangeTable,
    TickerFormat,
};

// =============================================================================
// Generators
// =============================================================================

/// Generates a symbol, sometimes carrying a dotted share class or suffix of its own.
fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9]{1,6}",
        "[A-Za-z0-9]{1,4}\\.[A-Za-z0-9]{1,2}",
        prop::sample::select(vec!["BRK.N", "X.O", "ABC.HK", "RDS.A", "ABC.N", "NOVN.SW"])
            .prop_map(String::from),
    ]
}

/// Generates an exchange designator: known, unknown and malformed.
fn arb_designator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "", ".SW", ".sw", ".HK", ".T", ".L", ".TO", ".XX", ".B", ":SWX", ":ebs", ":NASDAQ",
        ":TSEJ", ":FOO", ":SW1", ".N-CH", ".S", ".N", ".O", ".ZZ-ZZ", ".S-ZZ", "@", ".",
    ])
}

/// Generates a ticker built from a symbol and a designator.
fn arb_ticker() -> impl Strategy<Value = String> {
    (arb_symbol(), arb_designator()).prop_map(|(symbol, designator)| {
        format!("{}{}", symbol, designator)
    })
}

/// Picks a record from the built-in table.
fn arb_record() -> impl Strategy<Value = ExchangeRecord> {
    prop::sample::select(ExchangeTable::builtin().records().to_vec())
}

/// Every spelling that should denote the same listing on `record`.
fn spellings(symbol: &str, record: &ExchangeRecord) -> Vec<String> {
    let mut all = Vec::new();
    if record.is_domestic() {
        all.push(symbol.to_string());
    } else {
        all.push(format!("{}{}", symbol, record.suffix));
        all.push(format!("{}{}", symbol, record.suffix.to_lowercase()));
    }
    for code in &record.ibkr_aliases {
        all.push(format!("{}:{}", symbol, code));
    }
    for code in &record.reuters_aliases {
        all.push(format!("{}.{}", symbol, code));
        all.push(format!("{}.X-{}", symbol, code));
    }
    all
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_to_yfinance_is_idempotent(ticker in arb_ticker()) {
        let once = to_yfinance(&ticker);
        prop_assert_eq!(to_yfinance(&once), once);
    }

    #[test]
    fn prop_ibkr_route_survives_yfinance(ticker in arb_ticker()) {
        let (normalized, meta) = normalize_ticker(&ticker);
        if meta.format.is_resolved() {
            prop_assert_eq!(to_ibkr(&normalized), to_ibkr(&ticker));
            prop_assert_eq!(
                is_international(&normalized),
                is_international(&ticker)
            );
        }
    }

    #[test]
    fn prop_normalized_is_uppercase(ticker in arb_ticker()) {
        let (normalized, meta) = normalize_ticker(&ticker);
        prop_assert_eq!(&normalized, &normalized.to_uppercase());
        prop_assert_eq!(meta.original, ticker.to_uppercase());
        prop_assert_eq!(&meta.symbol, &meta.symbol.to_uppercase());
    }

    #[test]
    fn prop_all_spellings_share_ibkr_route(symbol in "[A-Z0-9]{1,6}", record in arb_record()) {
        let expected = format!("{}:{}", symbol, record.ibkr_exchange);
        for spelling in spellings(&symbol, &record) {
            prop_assert_eq!(to_ibkr(&spelling), expected.clone(), "spelling {}", spelling);
            prop_assert_eq!(to_ibkr(&to_yfinance(&spelling)), expected.clone());
        }
    }

    #[test]
    fn prop_all_spellings_share_canonical_form(symbol in "[A-Z0-9]{1,6}", record in arb_record()) {
        let expected = format!("{}{}", symbol, record.suffix);
        for spelling in spellings(&symbol, &record) {
            prop_assert_eq!(to_yfinance(&spelling), expected.clone(), "spelling {}", spelling);
        }
    }

    #[test]
    fn prop_format_and_country_are_consistent(input in "\\PC{0,12}") {
        let (_, meta) = normalize_ticker(&input);
        prop_assert!(TickerFormat::ALL.contains(&meta.format));
        let unresolved = matches!(meta.format, TickerFormat::Unknown | TickerFormat::Invalid);
        prop_assert_eq!(meta.country == "Unknown", unresolved);
    }

    #[test]
    fn prop_unresolved_is_international(input in "[A-Za-z0-9.:@-]{0,12}") {
        let (_, meta) = normalize_ticker(&input);
        if !meta.format.is_resolved() {
            prop_assert!(is_international(&input));
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_novn_spellings_route_to_swx() {
    for spelling in ["NOVN.SW", "NOVN:SWX", "NOVN.N-CH"] {
        assert_eq!(to_ibkr(spelling), "NOVN:SWX");
        assert_eq!(to_ibkr(&to_yfinance(spelling)), "NOVN:SWX");
    }
}

#[test]
fn test_dotted_symbols_on_us_routes_are_stable() {
    for (ticker, canonical) in [
        ("BRK.N:NYSE", "BRK-N"),
        ("X.O:NASDAQ", "X-O"),
        ("ABC.N.N", "ABC-N"),
        ("ABC.HK:NYSE", "ABC-HK"),
    ] {
        let once = to_yfinance(ticker);
        assert_eq!(once, canonical);
        assert_eq!(to_yfinance(&once), once);
        assert_eq!(to_ibkr(&once), to_ibkr(ticker));
    }
}

#[test]
fn test_international_flag() {
    assert!(!is_international("AAPL"));
    assert!(is_international("UNKNOWN.XX"));
}

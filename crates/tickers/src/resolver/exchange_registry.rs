//! JSON-driven exchange metadata table.
//!
//! The default catalog is compiled in from `exchanges.json` via `include_str!`
//! and indexed once via `lazy_static`. Custom catalogs go through the same
//! validation with [`ExchangeTable::from_json`] or [`ExchangeTable::from_records`].

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use serde::Deserialize;

use crate::errors::{AliasKind, TickerError};
use crate::models::ExchangeRecord;

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ExchangeCatalog {
    exchanges: Vec<ExchangeRecord>,
}

// ── Table with pre-built indexes ─────────────────────────────────────────────

/// Exchange records plus reverse indexes by suffix, IBKR code and Reuters code.
///
/// All index keys are uppercase. Suffix keys are stored without the leading
/// dot (e.g. "SW"), matching how they appear after splitting a ticker.
#[derive(Debug, Clone)]
pub struct ExchangeTable {
    records: Vec<ExchangeRecord>,
    /// Yahoo suffix without dot → record index
    by_suffix: HashMap<String, usize>,
    /// IBKR exchange code → record index
    by_ibkr: HashMap<String, usize>,
    /// Reuters exchange/country code → record index
    by_reuters: HashMap<String, usize>,
    /// The suffix-less (US) record, if the catalog has one
    domestic: Option<usize>,
}

lazy_static! {
    pub(crate) static ref DEFAULT_TABLE: Arc<ExchangeTable> = Arc::new(
        ExchangeTable::from_json(include_str!("exchanges.json"))
            .expect("exchanges.json must be valid")
    );
}

impl ExchangeTable {
    /// The built-in table.
    pub fn builtin() -> Arc<ExchangeTable> {
        Arc::clone(&DEFAULT_TABLE)
    }

    /// Parse and index a catalog of the form `{"exchanges": [ ... ]}`.
    pub fn from_json(json: &str) -> Result<Self, TickerError> {
        let catalog: ExchangeCatalog = serde_json::from_str(json)?;
        Self::from_records(catalog.exchanges)
    }

    /// Index a list of records.
    ///
    /// Fails if two records share a suffix, or if an IBKR or Reuters alias is
    /// claimed by more than one record.
    pub fn from_records(records: Vec<ExchangeRecord>) -> Result<Self, TickerError> {
        let mut by_suffix = HashMap::new();
        let mut by_ibkr = HashMap::new();
        let mut by_reuters = HashMap::new();
        let mut domestic = None;

        for (idx, record) in records.iter().enumerate() {
            let key = suffix_key(&record.suffix);
            if key.is_empty() {
                if domestic.replace(idx).is_some() {
                    return Err(TickerError::DuplicateSuffix(record.suffix.clone()));
                }
            } else if by_suffix.insert(key, idx).is_some() {
                return Err(TickerError::DuplicateSuffix(record.suffix.clone()));
            }

            for alias in &record.ibkr_aliases {
                insert_alias(&mut by_ibkr, AliasKind::Ibkr, alias, idx, &records)?;
            }
            for alias in &record.reuters_aliases {
                insert_alias(&mut by_reuters, AliasKind::Reuters, alias, idx, &records)?;
            }
        }

        debug!(
            "Indexed {} exchanges ({} IBKR codes, {} Reuters codes)",
            records.len(),
            by_ibkr.len(),
            by_reuters.len()
        );

        Ok(Self {
            records,
            by_suffix,
            by_ibkr,
            by_reuters,
            domestic,
        })
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[ExchangeRecord] {
        &self.records
    }

    /// Look up a Yahoo suffix, with or without the leading dot (case-insensitive).
    pub fn by_suffix(&self, suffix: &str) -> Option<&ExchangeRecord> {
        let key = suffix_key(suffix);
        if key.is_empty() {
            return None;
        }
        self.by_suffix.get(&key).map(|&idx| &self.records[idx])
    }

    /// Look up an IBKR exchange code (case-insensitive).
    pub fn by_ibkr(&self, code: &str) -> Option<&ExchangeRecord> {
        self.by_ibkr
            .get(&code.to_uppercase())
            .map(|&idx| &self.records[idx])
    }

    /// Look up a Reuters exchange or country code (case-insensitive).
    pub fn by_reuters(&self, code: &str) -> Option<&ExchangeRecord> {
        self.by_reuters
            .get(&code.to_uppercase())
            .map(|&idx| &self.records[idx])
    }

    /// The suffix-less record used for US listings.
    pub fn domestic(&self) -> Option<&ExchangeRecord> {
        self.domestic.map(|idx| &self.records[idx])
    }

    /// Known Yahoo suffixes with their dot, sorted.
    pub fn yahoo_suffixes(&self) -> Vec<&str> {
        let mut suffixes: Vec<&str> = self
            .records
            .iter()
            .filter(|r| !r.is_domestic())
            .map(|r| r.suffix.as_str())
            .collect();
        suffixes.sort_unstable();
        suffixes
    }
}

fn suffix_key(suffix: &str) -> String {
    suffix.trim().trim_start_matches('.').to_uppercase()
}

fn insert_alias(
    index: &mut HashMap<String, usize>,
    kind: AliasKind,
    alias: &str,
    idx: usize,
    records: &[ExchangeRecord],
) -> Result<(), TickerError> {
    let key = alias.trim().to_uppercase();
    match index.get(&key) {
        // Listing the same alias twice on one record is harmless
        Some(&existing) if existing == idx => Ok(()),
        Some(&existing) => Err(TickerError::DuplicateAlias {
            kind,
            alias: key,
            first: records[existing].suffix.clone(),
            second: records[idx].suffix.clone(),
        }),
        None => {
            index.insert(key, idx);
            Ok(())
        }
    }
}

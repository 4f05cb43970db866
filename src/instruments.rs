//! Instrument directory — trading symbol to DhanHQ security lookup.
//!
//! The directory is read once from a CSV instrument dataset at startup and is
//! immutable afterwards, so it can be shared across request handlers behind
//! an `Arc` without locking.
//!
//! The dataset must carry the columns `tradingSymbol`, `securityId`,
//! `exchangeSegment` and `instrument`; any other columns are ignored. A row
//! whose cells do not parse (blank, or an unknown segment or instrument type)
//! is skipped and only that symbol becomes unreachable.
//!
//! ```no_run
//! use dhan_kline_proxy::instruments::InstrumentDirectory;
//!
//! # fn main() -> dhan_kline_proxy::Result<()> {
//! let directory = InstrumentDirectory::load("api-scrip-master.csv")?;
//! let tcs = directory.lookup("TCS")?;
//! println!("{} -> {}", tcs.trading_symbol, tcs.security_id);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProxyError, Result};
use crate::types::enums::{ExchangeSegment, Instrument};

/// One row of the instrument dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentRecord {
    /// Human-readable ticker, the lookup key.
    pub trading_symbol: String,
    /// DhanHQ security identifier, kept verbatim as text.
    pub security_id: String,
    pub exchange_segment: ExchangeSegment,
    pub instrument: Instrument,
}

/// Read-only symbol table built from the instrument dataset.
#[derive(Debug, Clone, Default)]
pub struct InstrumentDirectory {
    by_symbol: HashMap<String, InstrumentRecord>,
}

/// Columns every instrument dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["tradingSymbol", "securityId", "exchangeSegment", "instrument"];

impl InstrumentDirectory {
    /// Load the directory from a CSV file.
    ///
    /// Fails if the file cannot be read or lacks a required column. Rows that
    /// do not parse are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|source| ProxyError::ScripMaster {
            path: path.to_owned(),
            source,
        })?;
        let directory = Self::from_csv(reader, path)?;

        tracing::info!(
            path = %path.display(),
            instruments = directory.len(),
            "instrument directory loaded"
        );
        Ok(directory)
    }

    /// Build the directory from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(csv::Reader::from_reader(reader), Path::new("<reader>"))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Self> {
        let load_error = |source| ProxyError::ScripMaster {
            path: path.to_owned(),
            source,
        };

        let headers = reader.headers().map_err(load_error)?;
        if let Some(column) = REQUIRED_COLUMNS
            .into_iter()
            .find(|&column| !headers.iter().any(|h| h.trim() == column))
        {
            return Err(ProxyError::MissingColumn(column));
        }

        let mut by_symbol = HashMap::new();
        let mut duplicates = 0usize;
        let mut skipped = 0usize;

        for row in reader.deserialize::<InstrumentRecord>() {
            let record = match row {
                Ok(record) => record,
                Err(e) if is_bad_row(&e) => {
                    tracing::debug!("skipping instrument row: {e}");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(load_error(e)),
            };
            // First occurrence in file order wins.
            match by_symbol.entry(record.trading_symbol.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "ignored instrument rows that could not be parsed");
        }
        if duplicates > 0 {
            tracing::debug!(duplicates, "ignored rows with an already-seen trading symbol");
        }
        Ok(Self { by_symbol })
    }

    /// Exact, case-sensitive lookup by trading symbol.
    pub fn lookup(&self, symbol: &str) -> Result<&InstrumentRecord> {
        self.by_symbol
            .get(symbol)
            .ok_or_else(|| ProxyError::InstrumentNotFound(symbol.to_owned()))
    }

    /// Number of distinct trading symbols.
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// A row-local failure: a cell that does not fit the record, or a ragged row.
fn is_bad_row(e: &csv::Error) -> bool {
    matches!(
        e.kind(),
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
    )
}

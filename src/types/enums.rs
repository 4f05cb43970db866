//! Instrument classification enums that map directly to DhanHQ string values.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` to match both the instrument
//! dataset columns and the JSON wire format expected by DhanHQ, so we
//! suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Exchange Segment
// ---------------------------------------------------------------------------

/// Exchange and segment identifier used across all DhanHQ APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeSegment {
    /// Index value.
    IDX_I,
    /// NSE Equity Cash.
    NSE_EQ,
    /// NSE Futures & Options.
    NSE_FNO,
    /// NSE Currency.
    NSE_CURRENCY,
    /// BSE Equity Cash.
    BSE_EQ,
    /// MCX Commodity.
    MCX_COMM,
    /// BSE Currency.
    BSE_CURRENCY,
    /// BSE Futures & Options.
    BSE_FNO,
}

impl ExchangeSegment {
    /// The wire string for this segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IDX_I => "IDX_I",
            Self::NSE_EQ => "NSE_EQ",
            Self::NSE_FNO => "NSE_FNO",
            Self::NSE_CURRENCY => "NSE_CURRENCY",
            Self::BSE_EQ => "BSE_EQ",
            Self::MCX_COMM => "MCX_COMM",
            Self::BSE_CURRENCY => "BSE_CURRENCY",
            Self::BSE_FNO => "BSE_FNO",
        }
    }
}

impl fmt::Display for ExchangeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Instrument
// ---------------------------------------------------------------------------

/// Instrument type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    INDEX,
    FUTIDX,
    OPTIDX,
    EQUITY,
    FUTSTK,
    OPTSTK,
    FUTCOM,
    OPTFUT,
    FUTCUR,
    OPTCUR,
}

impl Instrument {
    /// The wire string for this instrument type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::INDEX => "INDEX",
            Self::FUTIDX => "FUTIDX",
            Self::OPTIDX => "OPTIDX",
            Self::EQUITY => "EQUITY",
            Self::FUTSTK => "FUTSTK",
            Self::OPTSTK => "OPTSTK",
            Self::FUTCOM => "FUTCOM",
            Self::OPTFUT => "OPTFUT",
            Self::FUTCUR => "FUTCUR",
            Self::OPTCUR => "OPTCUR",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

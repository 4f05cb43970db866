//! Binance-style kline types — the inbound query and the output row.

use serde::{Deserialize, Serialize};

/// Query string of `GET /oanda/api/v1/klines`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineQuery {
    /// Trading symbol, matched case-sensitively against the instrument dataset.
    pub symbol: String,
    /// Free-form interval such as `"5m"`; only its digits are forwarded.
    pub interval: String,
    /// Inclusive start, epoch milliseconds.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Inclusive end, epoch milliseconds.
    #[serde(default)]
    pub end_time: Option<i64>,
}

/// One candle in Binance array form:
/// `[openTimeMillis, open, high, low, close, volume]`.
///
/// Price and volume fields are text, as Binance returns them. Serializes as a
/// 6-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KlineRow(
    pub i64,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
);

impl KlineRow {
    /// Candle open time in epoch milliseconds.
    pub fn open_time(&self) -> i64 {
        self.0
    }
}

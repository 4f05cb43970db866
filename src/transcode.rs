//! Column-to-row transcoding of DhanHQ candle responses.
//!
//! DhanHQ returns candles as parallel arrays:
//!
//! ```json
//! {"timestamp": [1700000000], "open": [100.5], "high": [101], "low": [99.8],
//!  "close": [100.9], "volume": [2000]}
//! ```
//!
//! Binance callers expect one array per candle, with the open time in
//! milliseconds and every price/volume field as text:
//!
//! ```json
//! [[1700000000000, "100.5", "101", "99.8", "100.9", "2000"]]
//! ```
//!
//! Columns are zipped position by position and the walk stops at the shortest
//! one. A bare string or number where a column is expected counts as a
//! one-element column. Transcoding is all-or-nothing: a single bad cell fails
//! the whole response.

use serde_json::{Map, Value};

use crate::error::{ProxyError, Result};
use crate::types::kline::KlineRow;

/// Keys of the six parallel columns, in output order.
pub const COLUMNS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

/// Turn a DhanHQ candle body into Binance kline rows.
pub fn transcode(body: &Value) -> Result<Vec<KlineRow>> {
    let object = body.as_object().ok_or_else(|| {
        ProxyError::Transcode(format!("expected a JSON object, got {}", kind(body)))
    })?;

    let [timestamp, open, high, low, close, volume] = [
        column(object, COLUMNS[0])?,
        column(object, COLUMNS[1])?,
        column(object, COLUMNS[2])?,
        column(object, COLUMNS[3])?,
        column(object, COLUMNS[4])?,
        column(object, COLUMNS[5])?,
    ];

    let lengths = [
        timestamp.len(),
        open.len(),
        high.len(),
        low.len(),
        close.len(),
        volume.len(),
    ];
    let rows = lengths.iter().copied().min().unwrap_or(0);
    if lengths.iter().any(|&len| len != rows) {
        tracing::warn!(?lengths, rows, "candle columns differ in length, truncating");
    }

    (0..rows)
        .map(|i| {
            Ok(KlineRow(
                open_time_millis(&timestamp[i])?,
                text(&open[i], "open")?,
                text(&high[i], "high")?,
                text(&low[i], "low")?,
                text(&close[i], "close")?,
                text(&volume[i], "volume")?,
            ))
        })
        .collect()
}

fn column<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a [Value]> {
    match object.get(key) {
        None => Err(ProxyError::Transcode(format!("missing field '{key}'"))),
        Some(Value::Array(values)) => Ok(values.as_slice()),
        Some(scalar @ (Value::String(_) | Value::Number(_))) => Ok(std::slice::from_ref(scalar)),
        Some(other) => Err(ProxyError::Transcode(format!(
            "field '{key}' must be an array, got {}",
            kind(other)
        ))),
    }
}

/// Epoch seconds (integer, float or numeric string) to epoch milliseconds.
fn open_time_millis(value: &Value) -> Result<i64> {
    let seconds = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    seconds
        .and_then(|s| s.checked_mul(1000))
        .ok_or_else(|| ProxyError::Transcode(format!("invalid timestamp {value}")))
}

fn text(value: &Value, field: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ProxyError::Transcode(format!(
            "'{field}' value {other} is not a number or string"
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#![allow(missing_docs)]
//! Historical Data types — Intraday candle request.

use serde::Serialize;

use crate::types::enums::*;

// ---------------------------------------------------------------------------
// Intraday Historical Data Request
// ---------------------------------------------------------------------------

/// Request body for intraday historical data.
///
/// Used by `POST /v2/charts/intraday`. The candle response is kept as raw
/// JSON and shaped by [`crate::transcode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntradayDataRequest {
    pub security_id: String,
    pub exchange_segment: ExchangeSegment,
    pub instrument: Instrument,
    /// Minute interval digits, e.g. `"5"`.
    pub interval: String,
    /// Start date/time (YYYY-MM-DD HH:MM:SS).
    pub from_date: String,
    /// End date/time (YYYY-MM-DD HH:MM:SS).
    pub to_date: String,
}

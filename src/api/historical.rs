//! Historical Data endpoint — Intraday candle data.

use serde_json::Value;

use crate::client::DhanClient;
use crate::constants::INTRADAY_CHARTS_PATH;
use crate::error::Result;
use crate::types::historical::*;

impl DhanClient {
    /// Retrieve intraday OHLCV candle data for an instrument.
    ///
    /// The body is returned as raw JSON; see [`crate::transcode`] for the
    /// shape checks.
    ///
    /// **Endpoint:** `POST /v2/charts/intraday`
    pub async fn get_intraday_historical(&self, req: &IntradayDataRequest) -> Result<Value> {
        tracing::debug!(
            security_id = %req.security_id,
            exchange_segment = %req.exchange_segment,
            instrument = %req.instrument,
            interval = %req.interval,
            from_date = %req.from_date,
            to_date = %req.to_date,
            "requesting intraday candles"
        );
        self.post(INTRADAY_CHARTS_PATH, req).await
    }
}

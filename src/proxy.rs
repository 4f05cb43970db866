//! Kline request orchestration.
//!
//! [`KlineProxy`] owns everything a request needs — the instrument directory
//! and the DhanHQ client — and is built once at startup, then shared with the
//! HTTP handlers as `Arc<KlineProxy>`.

use crate::client::DhanClient;
use crate::error::Result;
use crate::instruments::InstrumentDirectory;
use crate::types::historical::IntradayDataRequest;
use crate::types::kline::{KlineQuery, KlineRow};
use crate::{interval, range, transcode};

#[derive(Debug, Clone)]
pub struct KlineProxy {
    directory: InstrumentDirectory,
    client: DhanClient,
}

impl KlineProxy {
    pub fn new(directory: InstrumentDirectory, client: DhanClient) -> Self {
        Self { directory, client }
    }

    /// Answer a Binance-style kline query from DhanHQ intraday candles.
    ///
    /// Steps run in order and the first failure wins: symbol lookup, date
    /// range, interval, upstream call, transcoding.
    pub async fn klines(&self, query: &KlineQuery) -> Result<Vec<KlineRow>> {
        let record = self.directory.lookup(&query.symbol)?;
        let range = range::resolve(query.start_time, query.end_time)?;
        let interval = interval::normalize(&query.interval)?;

        let req = IntradayDataRequest {
            security_id: record.security_id.clone(),
            exchange_segment: record.exchange_segment,
            instrument: record.instrument,
            interval,
            from_date: range.from_date(),
            to_date: range.to_date(),
        };

        let candles = self.client.get_intraday_historical(&req).await?;
        let rows = transcode::transcode(&candles)?;

        tracing::debug!(symbol = %query.symbol, rows = rows.len(), "klines served");
        Ok(rows)
    }
}

//! # dhan-kline-proxy
//!
//! A Binance-compatible kline endpoint backed by the
//! [DhanHQ API v2](https://dhanhq.co/docs/v2/) intraday charts.
//!
//! A request for `GET /oanda/api/v1/klines?symbol=TCS&interval=5m` is answered
//! by looking `TCS` up in a CSV instrument dataset, posting to DhanHQ's
//! `/v2/charts/intraday`, and reshaping the parallel-array candles into
//! `[openTimeMs, open, high, low, close, volume]` rows.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dhan_kline_proxy::{DhanClient, InstrumentDirectory, KlineProxy, server};
//!
//! #[tokio::main]
//! async fn main() -> dhan_kline_proxy::Result<()> {
//!     let directory = InstrumentDirectory::load("api-scrip-master.csv")?;
//!     let client = DhanClient::new("your-access-token")?;
//!     let proxy = Arc::new(KlineProxy::new(directory, client));
//!     server::serve("0.0.0.0:8000".parse().unwrap(), proxy).await
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod instruments;
pub mod interval;
pub mod proxy;
pub mod range;
pub mod server;
pub mod transcode;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::DhanClient;
/// Re-export the error type and Result alias.
pub use error::{ProxyError, Result};
pub use instruments::InstrumentDirectory;
pub use proxy::KlineProxy;

//! Constants for the kline proxy.
//!
//! Contains the DhanHQ base URL and endpoint paths, the inbound route paths,
//! and the defaults used when a request or the environment leaves a value
//! unspecified.

// ---------------------------------------------------------------------------
// Upstream (DhanHQ)
// ---------------------------------------------------------------------------

/// Base URL for the DhanHQ REST API v2.
pub const API_BASE_URL: &str = "https://api.dhan.co";

/// Intraday candle endpoint, relative to [`API_BASE_URL`].
pub const INTRADAY_CHARTS_PATH: &str = "/v2/charts/intraday";

/// Header carrying the DhanHQ JWT access token.
pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// Wall-clock format DhanHQ expects for `fromDate` / `toDate`.
pub const UPSTREAM_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Inbound routes
// ---------------------------------------------------------------------------

/// Binance-style kline route.
pub const KLINES_ROUTE: &str = "/oanda/api/v1/klines";

/// Health-check route.
pub const STATUS_ROUTE: &str = "/";

/// Body of the health-check response.
pub const STATUS_MESSAGE: &str = "DhanHQ Historical Data API Proxy is running.";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Trailing window used when the caller does not give both time bounds.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Instrument dataset path used when `DHAN_SCRIP_MASTER` is unset.
pub const DEFAULT_SCRIP_MASTER_PATH: &str = "api-scrip-master.csv";

/// Listen address used when `DHAN_PROXY_BIND` is unset.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Listen port used when neither `DHAN_PROXY_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 8000;

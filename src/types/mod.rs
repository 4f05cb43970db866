//! Request and response types for the proxy.
//!
//! ## Organization
//!
//! - [`enums`] — DhanHQ exchange segment and instrument type enums
//! - [`historical`] — Upstream intraday candle request body
//! - [`kline`] — Inbound Binance-style query and output row
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod enums;
pub mod historical;
pub mod kline;

pub use enums::*;

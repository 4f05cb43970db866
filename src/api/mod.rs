//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`DhanClient`](crate::client::DhanClient) via `impl` blocks. All methods
//! handle JSON serialization, HTTP transport, and error mapping automatically.
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`historical`] | 1 | Intraday candles |

pub mod historical;

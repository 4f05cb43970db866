//! Interval normalization.
//!
//! Binance callers send intervals like `"5m"` or `"1h"`; DhanHQ wants the bare
//! minute count. Only the digits survive, so `"1h"` becomes `"1"` — the unit
//! is not interpreted, and unsupported values are left for DhanHQ to reject.

use crate::error::{ProxyError, Result};

/// Keep the ASCII digits of `interval`, in order.
///
/// Fails with [`ProxyError::InvalidInterval`] when there are none.
pub fn normalize(interval: &str) -> Result<String> {
    let digits: String = interval.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(ProxyError::InvalidInterval(interval.to_owned()));
    }
    Ok(digits)
}

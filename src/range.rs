//! Date range resolution for upstream candle requests.
//!
//! The caller's `startTime` / `endTime` are epoch milliseconds; DhanHQ takes
//! wall-clock `YYYY-MM-DD HH:MM:SS` strings with no zone. Conversion happens
//! in the process-local timezone via [`resolve`], or in any zone via
//! [`resolve_in`].
//!
//! When the caller does not give *both* bounds (a missing bound and a bound of
//! `0` count alike), the range is the [`DEFAULT_LOOKBACK_DAYS`] ending now. A
//! single bound is ignored rather than honoured.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};

use crate::constants::{DEFAULT_LOOKBACK_DAYS, UPSTREAM_DATETIME_FORMAT};
use crate::error::{ProxyError, Result};

/// Inclusive wall-clock range sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateRange {
    /// `from` in the upstream wire format.
    pub fn from_date(&self) -> String {
        self.from.format(UPSTREAM_DATETIME_FORMAT).to_string()
    }

    /// `to` in the upstream wire format.
    pub fn to_date(&self) -> String {
        self.to.format(UPSTREAM_DATETIME_FORMAT).to_string()
    }
}

/// Resolve a range in the local timezone, relative to the current time.
pub fn resolve(start_ms: Option<i64>, end_ms: Option<i64>) -> Result<DateRange> {
    resolve_in(&Local, Local::now(), start_ms, end_ms)
}

/// Resolve a range in `tz`, using `now` for the default window.
pub fn resolve_in<Tz: TimeZone>(
    tz: &Tz,
    now: DateTime<Tz>,
    start_ms: Option<i64>,
    end_ms: Option<i64>,
) -> Result<DateRange> {
    let start_ms = start_ms.filter(|&ms| ms != 0);
    let end_ms = end_ms.filter(|&ms| ms != 0);

    match (start_ms, end_ms) {
        (Some(start), Some(end)) => Ok(DateRange {
            from: wall_clock(tz, start)?,
            to: wall_clock(tz, end)?,
        }),
        (start, end) => {
            if start.is_some() || end.is_some() {
                tracing::debug!(
                    ?start,
                    ?end,
                    "only one time bound given, using default window"
                );
            }
            let to = now.naive_local();
            Ok(DateRange {
                from: to - Duration::days(DEFAULT_LOOKBACK_DAYS),
                to,
            })
        }
    }
}

fn wall_clock<Tz: TimeZone>(tz: &Tz, millis: i64) -> Result<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        ProxyError::InvalidTimeRange(format!("timestamp {millis} ms is out of range"))
    })?;
    Ok(utc.with_timezone(tz).naive_local())
}

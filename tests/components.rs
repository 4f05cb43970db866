//! Tests for the building blocks behind the kline endpoint: instrument
//! directory, interval normalization, date ranges, and transcoding.
//!
//! ```sh
//! cargo test --test components
//! ```

use std::io::Write;

use chrono::{FixedOffset, NaiveDateTime, TimeZone};
use dhan_kline_proxy::error::ProxyError;
use dhan_kline_proxy::instruments::InstrumentDirectory;
use dhan_kline_proxy::types::enums::*;
use dhan_kline_proxy::types::kline::KlineRow;
use dhan_kline_proxy::{interval, range, transcode};
use serde_json::json;

const SCRIP_MASTER: &str = "\
exchangeSegment,securityId,tradingSymbol,instrument,lotSize
NSE_EQ,11536,TCS,EQUITY,1
NSE_EQ,1333,HDFCBANK,EQUITY,1
IDX_I,13,NIFTY,INDEX,1
BSE_EQ,532540,TCS,EQUITY,1
";

fn directory() -> InstrumentDirectory {
    InstrumentDirectory::from_reader(SCRIP_MASTER.as_bytes()).expect("valid dataset")
}

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

// ===================================================================
// Instrument directory
// ===================================================================

#[test]
fn test_lookup_known_symbol() {
    let dir = directory();
    let nifty = dir.lookup("NIFTY").expect("NIFTY present");
    assert_eq!(nifty.security_id, "13");
    assert_eq!(nifty.exchange_segment, ExchangeSegment::IDX_I);
    assert_eq!(nifty.instrument, Instrument::INDEX);
}

#[test]
fn test_duplicate_symbol_first_row_wins() {
    let dir = directory();
    assert_eq!(dir.len(), 3);
    let tcs = dir.lookup("TCS").unwrap();
    assert_eq!(tcs.security_id, "11536");
    assert_eq!(tcs.exchange_segment, ExchangeSegment::NSE_EQ);
}

#[test]
fn test_lookup_is_case_sensitive() {
    let err = directory().lookup("tcs").unwrap_err();
    match err {
        ProxyError::InstrumentNotFound(symbol) => assert_eq!(symbol, "tcs"),
        other => panic!("Expected InstrumentNotFound, got: {other:?}"),
    }
}

#[test]
fn test_unparseable_rows_are_skipped() {
    let csv = "\
tradingSymbol,securityId,exchangeSegment,instrument
TCS,11536,NSE_EQ,EQUITY
CRUDEOIL,4242,MCX_COMM,FUTENR
BLANK,777,,EQUITY
SHORT,1
NIFTY,13,IDX_I,INDEX
";
    let dir = InstrumentDirectory::from_reader(csv.as_bytes()).expect("bad rows must not fail the load");

    assert_eq!(dir.len(), 2);
    assert_eq!(dir.lookup("TCS").unwrap().security_id, "11536");
    assert_eq!(dir.lookup("NIFTY").unwrap().security_id, "13");
    for skipped in ["CRUDEOIL", "BLANK", "SHORT"] {
        assert!(
            matches!(dir.lookup(skipped), Err(ProxyError::InstrumentNotFound(_))),
            "{skipped} should be unreachable"
        );
    }
}

#[test]
fn test_missing_column_is_fatal() {
    let csv = "tradingSymbol,securityId,instrument\nTCS,11536,EQUITY\n";
    match InstrumentDirectory::from_reader(csv.as_bytes()) {
        Err(ProxyError::MissingColumn(column)) => assert_eq!(column, "exchangeSegment"),
        other => panic!("Expected MissingColumn, got: {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCRIP_MASTER.as_bytes()).unwrap();

    let dir = InstrumentDirectory::load(file.path()).expect("load failed");
    assert_eq!(dir.lookup("HDFCBANK").unwrap().security_id, "1333");
}

#[test]
fn test_load_missing_file_is_fatal() {
    let err = InstrumentDirectory::load("/nonexistent/api-scrip-master.csv").unwrap_err();
    match &err {
        ProxyError::ScripMaster { path, .. } => {
            assert!(path.ends_with("api-scrip-master.csv"));
            assert!(err.detail().contains("api-scrip-master.csv"));
        }
        other => panic!("Expected ScripMaster, got: {other:?}"),
    }
}

// ===================================================================
// Interval
// ===================================================================

#[test]
fn test_normalize_keeps_digits_in_order() {
    assert_eq!(interval::normalize("5m").unwrap(), "5");
    assert_eq!(interval::normalize("1d").unwrap(), "1");
    assert_eq!(interval::normalize("15").unwrap(), "15");
    assert_eq!(interval::normalize("m1x5").unwrap(), "15");
}

#[test]
fn test_normalize_without_digits_fails() {
    for bad in ["abc", "", "m"] {
        match interval::normalize(bad) {
            Err(ProxyError::InvalidInterval(raw)) => assert_eq!(raw, bad),
            other => panic!("Expected InvalidInterval for {bad:?}, got: {other:?}"),
        }
    }
}

// ===================================================================
// Date range
// ===================================================================

#[test]
fn test_explicit_bounds_are_one_day_apart() {
    let now = ist().with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let r = range::resolve_in(&ist(), now, Some(1_700_000_000_000), Some(1_700_086_400_000))
        .unwrap();

    assert_eq!(r.from_date(), "2023-11-15 03:43:20");
    assert_eq!(r.to_date(), "2023-11-16 03:43:20");
    assert_eq!((r.to - r.from).num_days(), 1);
}

#[test]
fn test_default_window_is_thirty_days() {
    let now = ist().with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let r = range::resolve_in(&ist(), now, None, None).unwrap();

    assert_eq!(r.to_date(), "2024-03-31 12:00:00");
    assert_eq!(r.from_date(), "2024-03-01 12:00:00");
}

#[test]
fn test_single_or_zero_bound_uses_default_window() {
    let now = ist().with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let default = range::resolve_in(&ist(), now, None, None).unwrap();

    for (start, end) in [
        (Some(1_700_000_000_000), None),
        (None, Some(1_700_086_400_000)),
        (Some(0), Some(1_700_086_400_000)),
    ] {
        let r = range::resolve_in(&ist(), now, start, end).unwrap();
        assert_eq!(r, default, "start={start:?} end={end:?}");
    }
}

#[test]
fn test_local_resolve_formats_wall_clock() {
    let r = range::resolve(None, None).unwrap();
    let from = NaiveDateTime::parse_from_str(&r.from_date(), "%Y-%m-%d %H:%M:%S").unwrap();
    let to = NaiveDateTime::parse_from_str(&r.to_date(), "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!((to - from).num_days(), 30);
}

#[test]
fn test_unrepresentable_bound_is_rejected() {
    let now = ist().with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = range::resolve_in(&ist(), now, Some(1), Some(i64::MAX)).unwrap_err();
    assert!(matches!(err, ProxyError::InvalidTimeRange(_)), "{err:?}");
    assert_eq!(err.status_code(), 400);
}

// ===================================================================
// Transcoding
// ===================================================================

#[test]
fn test_transcode_mixed_types() {
    let body = json!({
        "timestamp": [1700000000],
        "open": [100.5],
        "high": [101],
        "low": "99.8",
        "close": [100.9],
        "volume": [2000]
    });
    let rows = transcode::transcode(&body).unwrap();
    assert_eq!(
        rows,
        vec![KlineRow(
            1_700_000_000_000,
            "100.5".into(),
            "101".into(),
            "99.8".into(),
            "100.9".into(),
            "2000".into(),
        )]
    );
    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([[1700000000000i64, "100.5", "101", "99.8", "100.9", "2000"]])
    );
}

#[test]
fn test_transcode_preserves_upstream_order() {
    let body = json!({
        "timestamp": [1700000300, 1700000000, "1700000600"],
        "open": [1, 2, 3],
        "high": [1, 2, 3],
        "low": [1, 2, 3],
        "close": [1, 2, 3],
        "volume": [10, 20, 30],
        "open_interest": []
    });
    let rows = transcode::transcode(&body).unwrap();
    let times: Vec<i64> = rows.iter().map(KlineRow::open_time).collect();
    assert_eq!(times, [1_700_000_300_000, 1_700_000_000_000, 1_700_000_600_000]);
}

#[test]
fn test_transcode_float_timestamp_truncates() {
    let body = json!({
        "timestamp": [1700000000.0],
        "open": [101.0], "high": [101.0], "low": [101.0], "close": [101.0], "volume": [5]
    });
    let rows = transcode::transcode(&body).unwrap();
    assert_eq!(rows[0].0, 1_700_000_000_000);
    assert_eq!(rows[0].1, "101.0");
}

#[test]
fn test_transcode_stops_at_shortest_column() {
    let body = json!({
        "timestamp": [1, 2, 3],
        "open": [1, 2],
        "high": [1, 2, 3],
        "low": [1, 2, 3],
        "close": [1, 2, 3],
        "volume": [1, 2, 3]
    });
    assert_eq!(transcode::transcode(&body).unwrap().len(), 2);
}

#[test]
fn test_transcode_empty_columns() {
    let body = json!({
        "timestamp": [], "open": [], "high": [], "low": [], "close": [], "volume": []
    });
    assert!(transcode::transcode(&body).unwrap().is_empty());
}

#[test]
fn test_transcode_missing_column() {
    let body = json!({ "timestamp": [1], "open": [1], "high": [1], "low": [1], "close": [1] });
    let err = transcode::transcode(&body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to parse DhanHQ response: missing field 'volume'"
    );
}

#[test]
fn test_transcode_rejects_bad_cells() {
    let bad_cells = [
        json!({ "timestamp": [null], "open": [1], "high": [1], "low": [1], "close": [1], "volume": [1] }),
        json!({ "timestamp": ["soon"], "open": [1], "high": [1], "low": [1], "close": [1], "volume": [1] }),
        json!({ "timestamp": [1], "open": [true], "high": [1], "low": [1], "close": [1], "volume": [1] }),
        json!({ "timestamp": [1], "open": [1], "high": [1], "low": [1], "close": [1], "volume": null }),
        json!({ "timestamp": [i64::MAX], "open": [1], "high": [1], "low": [1], "close": [1], "volume": [1] }),
    ];
    for body in bad_cells {
        let err = transcode::transcode(&body).unwrap_err();
        assert!(matches!(err, ProxyError::Transcode(_)), "{body}: {err:?}");
        assert_eq!(err.status_code(), 500);
    }
}

#[test]
fn test_transcode_rejects_non_object() {
    let err = transcode::transcode(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, ProxyError::Transcode(_)), "{err:?}");
}

//! Integration tests for price log parsing

use poly_buffer::data::{self, LogError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_file_groups_markets() {
    let file = write_log(
        "\
2026-01-10T17:13:36.580Z,btc,btc-updown-15m-1768064400,0.9850,0.0150,1.0000
2026-01-10T17:13:37.580Z,eth,eth-updown-15m-1768064400,0.5100,0.4900,1.0000
2026-01-10T17:13:38.580Z,btc,btc-updown-15m-1768064400,0.9800,0.0200,1.0000
",
    );

    let log = data::parse(file.path()).unwrap();
    assert_eq!(log.market_count(), 2);
    assert_eq!(log.get("btc").unwrap().len(), 2);
    assert_eq!(log.get("eth").unwrap().len(), 1);

    let pooled = log.pooled();
    assert_eq!(pooled[0].yes_price, 0.985);
    assert_eq!(pooled[1].yes_price, 0.98);
    assert_eq!(pooled[2].market, "eth");
}

#[test]
fn test_parse_file_fully_malformed_is_empty() {
    let file = write_log("timestamp,market,slug,yes,no\nbroken line\n,,,,\n\n");
    let log = data::parse(file.path()).unwrap();
    assert!(log.is_empty());
    assert_eq!(log.total_points(), 0);
}

#[test]
fn test_parse_empty_file() {
    let file = write_log("");
    assert!(data::parse(file.path()).unwrap().is_empty());
}

#[test]
fn test_parse_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("price.log");

    let err = data::parse(&missing).unwrap_err();
    assert!(matches!(err, LogError::NotFound(ref p) if p == &missing));
    assert!(err.to_string().contains("Price log file not found"));
}

#[test]
fn test_parse_invalid_utf8_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"t,btc,s,0.5,0.5\n\xff\xfe,btc,s,0.5,0.5\n").unwrap();
    file.flush().unwrap();

    let err = data::parse(file.path()).unwrap_err();
    assert!(matches!(err, LogError::Io { .. }));
}

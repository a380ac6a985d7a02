//! End-to-end tests: log file to recommendation

use poly_buffer::cli::AnalyzeArgs;
use poly_buffer::config::Config;
use poly_buffer::data;
use poly_buffer::recommend::{recommend, Recommendation, RecommendationBasis};
use poly_buffer::report::{AnalysisReport, OutputFormat};
use poly_buffer::stats::{movement_stats, range_stats, DEFAULT_THRESHOLD};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

/// A btc contract drifting around the midpoint in one-cent steps
fn drifting_log() -> String {
    let yes = [
        0.50, 0.51, 0.49, 0.48, 0.50, 0.52, 0.53, 0.51, 0.49, 0.47, 0.46, 0.48,
    ];
    yes.iter()
        .enumerate()
        .map(|(i, y)| {
            format!(
                "2026-01-10T17:00:{:02}.000Z,btc,btc-updown-15m-1768064400,{:.4},{:.4},1.0000\n",
                i,
                y,
                1.0 - y
            )
        })
        .collect()
}

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn args_for(file: &NamedTempFile, format: OutputFormat) -> AnalyzeArgs {
    AnalyzeArgs {
        log: Some(file.path().to_path_buf()),
        threshold: None,
        format: Some(format),
    }
}

#[test]
fn test_pipeline_recommends_from_p75() {
    let file = write_log(&drifting_log());
    let log = data::parse(file.path()).unwrap();
    let pooled = log.pooled();

    let movement = movement_stats(&pooled).unwrap();
    let range = range_stats(&pooled, DEFAULT_THRESHOLD).unwrap();

    // 11 steps, two samples each
    assert_eq!(movement.samples, 22);
    assert!(movement.p75 >= movement.median);
    assert!(movement.p95 >= movement.p90);

    let buffer = recommend(Some(&movement), Some(&range));
    assert!(buffer >= dec!(0.01) && buffer <= dec!(0.05));

    let rec = Recommendation::build(Some(&movement), Some(&range));
    assert_eq!(rec.buffer, buffer);
    assert_eq!(rec.basis, RecommendationBasis::MovementP75);
}

#[test]
fn test_pipeline_single_line_falls_back() {
    let file = write_log("2026-01-10T17:00:00Z,btc,btc-updown,0.50,0.50,1.00\n");
    let log = data::parse(file.path()).unwrap();
    let report = AnalysisReport::build(file.path(), &log, DEFAULT_THRESHOLD);

    assert!(report.movement.is_none());
    assert!(report.range.is_some());
    assert_eq!(report.recommendation.buffer, dec!(0.03));
}

#[test]
fn test_analyze_table_output() {
    let file = write_log(&drifting_log());
    let output = args_for(&file, OutputFormat::Table)
        .run(&Config::default())
        .unwrap();

    assert!(output.contains("Found 1 market(s)"));
    assert!(output.contains("Total price points: 12"));
    assert!(output.contains("PRICE MOVEMENT ANALYSIS"));
    assert!(output.contains("Recommended TRADE_PRICE_BUFFER:"));
}

#[test]
fn test_analyze_json_output() {
    let file = write_log(&drifting_log());
    let output = args_for(&file, OutputFormat::Json)
        .run(&Config::default())
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total_points"], 12);
    assert_eq!(value["movement"]["samples"], 22);
    assert_eq!(value["range"]["buffers"].as_object().unwrap().len(), 10);
}

#[test]
fn test_analyze_missing_log_fails() {
    let args = AnalyzeArgs {
        log: Some("/nonexistent/logs/price.log".into()),
        threshold: None,
        format: None,
    };
    let err = args.run(&Config::default()).unwrap_err();
    assert!(err.to_string().contains("Price log file not found"));
}

#[test]
fn test_analyze_no_valid_lines_fails() {
    let file = write_log("timestamp,market,slug,yes_price,no_price,sum\n");
    let err = args_for(&file, OutputFormat::Table)
        .run(&Config::default())
        .unwrap_err();
    assert!(err.to_string().contains("No price data found"));
}

#[test]
fn test_analyze_threshold_override() {
    let file = write_log(&drifting_log());
    let args = AnalyzeArgs {
        log: Some(file.path().to_path_buf()),
        threshold: Some(0.6),
        format: Some(OutputFormat::Json),
    };
    let output = args.run(&Config::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["threshold"], 0.6);
    assert_eq!(value["range"]["threshold"], 0.6);
}

//! Configuration integration tests

use poly_buffer::config::Config;
use poly_buffer::report::OutputFormat;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.input.log_file.to_str(), Some("logs/price.log"));
    assert_eq!(config.analysis.threshold, 0.5);
    assert_eq!(config.report.format, OutputFormat::Table);
}

#[test]
fn test_config_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[report]\nformat = \"json\"").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.report.format, OutputFormat::Json);
    assert_eq!(config.telemetry.log_level, "warn");
}

#[test]
fn test_config_load_malformed() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[analysis\nthreshold = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}

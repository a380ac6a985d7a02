//! Analyze command implementation

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::data::{self, LogError};
use crate::report::{AnalysisReport, OutputFormat};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Price log to analyze [default: input.log_file from config]
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Upper edge of the dwell band [default: analysis.threshold from config]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output format [default: report.format from config]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl AnalyzeArgs {
    /// Run the analysis and return the rendered report
    pub fn run(&self, config: &Config) -> anyhow::Result<String> {
        let log_file = self
            .log
            .clone()
            .unwrap_or_else(|| config.input.log_file.clone());
        let threshold = self.threshold.unwrap_or(config.analysis.threshold);
        let format = self.format.unwrap_or(config.report.format);

        if !threshold.is_finite() {
            anyhow::bail!("Threshold must be a finite number, got {}", threshold);
        }

        tracing::info!(path = %log_file.display(), threshold, "Analyzing price log");

        let log = data::parse(&log_file)?;
        if log.is_empty() {
            return Err(LogError::Empty(log_file).into());
        }

        for series in log.markets() {
            tracing::info!(market = %series.market, points = series.len(), "Loaded market");
        }

        let report = AnalysisReport::build(log_file, &log, threshold);
        report.render(format)
    }

    /// Run the analysis and print the report to stdout
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let output = self.run(config)?;
        println!("{output}");
        Ok(())
    }
}

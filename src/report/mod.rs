//! Analysis report
//!
//! Collects the parser, statistics and recommendation outputs for one log
//! and renders them as a console table or JSON.

mod table;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{MarketSeries, PriceLog};
use crate::recommend::Recommendation;
use crate::stats::{movement_stats, range_stats, MovementStats, RangeStats};

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Table,
    /// Single JSON document
    Json,
}

/// Per-market line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSummary {
    pub market: String,
    /// Number of price points
    pub points: usize,
    /// Distinct contract slugs
    pub contracts: usize,
    /// Seconds between first and last quote, when timestamps are RFC 3339
    pub span_secs: Option<i64>,
}

impl From<&MarketSeries> for MarketSummary {
    fn from(series: &MarketSeries) -> Self {
        Self {
            market: series.market.clone(),
            points: series.len(),
            contracts: series.contract_count(),
            span_secs: series.span().map(|d| d.num_seconds()),
        }
    }
}

/// Complete analysis of one price log
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Log file the report was built from
    pub log_file: PathBuf,
    /// Dwell band upper edge
    pub threshold: f64,
    pub markets: Vec<MarketSummary>,
    pub total_points: usize,
    /// Absent when there were too few movements
    pub movement: Option<MovementStats>,
    /// Absent when there were no observations
    pub range: Option<RangeStats>,
    pub recommendation: Recommendation,
}

impl AnalysisReport {
    /// Run the full analysis over a parsed log
    ///
    /// Markets are pooled in first-appearance order before analysis.
    pub fn build(log_file: impl Into<PathBuf>, log: &PriceLog, threshold: f64) -> Self {
        let markets: Vec<MarketSummary> = log.markets().map(MarketSummary::from).collect();
        let pooled = log.pooled();

        let movement = movement_stats(&pooled);
        let range = range_stats(&pooled, threshold);
        let recommendation = Recommendation::build(movement.as_ref(), range.as_ref());

        Self {
            log_file: log_file.into(),
            threshold,
            markets,
            total_points: pooled.len(),
            movement,
            range,
            recommendation,
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        self.to_string()
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Table => Ok(self.format_table()),
            OutputFormat::Json => Ok(self.to_json()?),
        }
    }
}

//! Price log types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use thiserror::Error;

/// Price log errors
#[derive(Debug, Error)]
pub enum LogError {
    /// Log file does not exist
    #[error("Price log file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Log file exists but could not be opened or read
    #[error("Failed to read price log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Log file contained no valid price lines
    #[error("No price data found in log file: {}", .0.display())]
    Empty(PathBuf),
}

/// A single YES/NO quote from the price log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Raw timestamp as written by the logger
    pub timestamp: String,
    /// Underlying market (e.g., "btc")
    pub market: String,
    /// Contract slug (e.g., "btc-updown-15m-1768064400")
    pub slug: String,
    /// YES token price
    pub yes_price: f64,
    /// NO token price
    pub no_price: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(
        timestamp: impl Into<String>,
        market: impl Into<String>,
        slug: impl Into<String>,
        yes_price: f64,
        no_price: f64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            market: market.into(),
            slug: slug.into(),
            yes_price,
            no_price,
        }
    }

    /// Timestamp as UTC if it is valid RFC 3339
    ///
    /// Only used for reporting; ordering is always file order.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// Observations for one market, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    /// Market key shared by every observation
    pub market: String,
    /// Observations in file order
    pub observations: Vec<Observation>,
}

impl MarketSeries {
    /// Create an empty series for a market
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            observations: Vec::new(),
        }
    }

    /// Number of price points
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series has no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of distinct contract slugs seen
    pub fn contract_count(&self) -> usize {
        self.observations
            .iter()
            .map(|o| o.slug.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Time between the first and last observation
    ///
    /// Absent when either endpoint timestamp is not RFC 3339.
    pub fn span(&self) -> Option<Duration> {
        let first = self.observations.first()?.parsed_timestamp()?;
        let last = self.observations.last()?.parsed_timestamp()?;
        Some(last - first)
    }
}

/// Parsed price log, grouped by market
///
/// Markets keep the order in which they first appear in the file.
#[derive(Debug, Clone, Default)]
pub struct PriceLog {
    series: Vec<MarketSeries>,
    index: HashMap<String, usize>,
}

impl PriceLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observation to its market's series
    pub fn push(&mut self, observation: Observation) {
        let idx = match self.index.get(&observation.market) {
            Some(&idx) => idx,
            None => {
                let idx = self.series.len();
                self.index.insert(observation.market.clone(), idx);
                self.series.push(MarketSeries::new(observation.market.clone()));
                idx
            }
        };
        self.series[idx].observations.push(observation);
    }

    /// Series for a market
    pub fn get(&self, market: &str) -> Option<&MarketSeries> {
        self.index.get(market).map(|&idx| &self.series[idx])
    }

    /// Iterate series in first-appearance order
    pub fn markets(&self) -> impl Iterator<Item = &MarketSeries> {
        self.series.iter()
    }

    /// Number of markets
    pub fn market_count(&self) -> usize {
        self.series.len()
    }

    /// Total observations across all markets
    pub fn total_points(&self) -> usize {
        self.series.iter().map(MarketSeries::len).sum()
    }

    /// Check if no valid observations were parsed
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// All observations concatenated market by market
    ///
    /// Market boundaries are not marked: the last quote of one market and
    /// the first quote of the next are adjacent in the result.
    pub fn pooled(&self) -> Vec<Observation> {
        self.series
            .iter()
            .flat_map(|s| s.observations.iter().cloned())
            .collect()
    }
}

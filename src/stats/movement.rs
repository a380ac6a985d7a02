//! Price movement statistics
//!
//! Distribution of absolute step changes between consecutive quotes.

use serde::{Deserialize, Serialize};

use super::quantile::Percentile;
use crate::data::Observation;

/// Fewest movement samples needed for a sample standard deviation
pub const MIN_MOVEMENTS: usize = 2;

/// Summary of absolute price movements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementStats {
    /// Number of movement samples (two per usable pair: YES and NO)
    pub samples: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (divides by N - 1)
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl MovementStats {
    /// Summarize a set of movement magnitudes
    ///
    /// Returns `None` with fewer than two samples or if any statistic is not
    /// finite.
    pub fn from_movements(movements: &[f64]) -> Option<Self> {
        if movements.len() < MIN_MOVEMENTS {
            return None;
        }

        let mut sorted = movements.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        let variance = sorted.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let stdev = variance.sqrt();

        if !mean.is_finite() || !stdev.is_finite() {
            return None;
        }

        Some(Self {
            samples: n,
            mean,
            median,
            stdev,
            min: sorted[0],
            max: sorted[n - 1],
            p75: Percentile::P75.of_sorted(&sorted)?,
            p90: Percentile::P90.of_sorted(&sorted)?,
            p95: Percentile::P95.of_sorted(&sorted)?,
        })
    }

    /// Value of a reported percentile
    pub fn percentile(&self, percentile: Percentile) -> f64 {
        match percentile {
            Percentile::P75 => self.p75,
            Percentile::P90 => self.p90,
            Percentile::P95 => self.p95,
        }
    }
}

/// Absolute YES and NO changes between each adjacent pair of observations
///
/// Pairs are taken over the slice as given, so when markets have been
/// pooled the boundary between two markets counts as a step. A pair with a
/// non-finite price at either end contributes nothing.
pub fn movements(observations: &[Observation]) -> Vec<f64> {
    let mut out = Vec::with_capacity(observations.len().saturating_sub(1) * 2);
    for pair in observations.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let prices = [prev.yes_price, curr.yes_price, prev.no_price, curr.no_price];
        if prices.iter().any(|p| !p.is_finite()) {
            continue;
        }
        out.push((curr.yes_price - prev.yes_price).abs());
        out.push((curr.no_price - prev.no_price).abs());
    }
    out
}

/// Movement statistics over a pooled observation sequence
///
/// Returns `None` when there is not enough data rather than failing.
pub fn movement_stats(observations: &[Observation]) -> Option<MovementStats> {
    if observations.len() < 2 {
        tracing::debug!(
            observations = observations.len(),
            "Too few observations for movement analysis"
        );
        return None;
    }

    let movements = movements(observations);
    let stats = MovementStats::from_movements(&movements);
    if stats.is_none() {
        tracing::debug!(
            movements = movements.len(),
            "Insufficient movement samples"
        );
    }
    stats
}

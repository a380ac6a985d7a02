//! Range-dwell analysis
//!
//! Measures how often quotes sit just below the 50 cent threshold, for each
//! candidate buffer width.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::Observation;

/// Binary market midpoint
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Candidate buffer widths in cents (0.01 through 0.10)
pub const BUFFER_CANDIDATE_CENTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Candidate buffer widths, ascending
///
/// Yields the exact decimal key alongside the float width used for band
/// tests.
pub fn buffer_candidates() -> impl Iterator<Item = (Decimal, f64)> {
    BUFFER_CANDIDATE_CENTS
        .iter()
        .map(|&cents| (Decimal::new(cents as i64, 2), cents as f64 / 100.0))
}

/// Dwell statistics for one buffer width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DwellStats {
    /// Percentage of observations in the band (0 to 100)
    pub in_range_pct: f64,
    /// Longest run of consecutive in-band observations
    pub max_consecutive: usize,
}

/// Dwell statistics for every candidate buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStats {
    /// Upper edge of every dwell band
    pub threshold: f64,
    /// Results keyed by buffer width
    pub buffers: BTreeMap<Decimal, DwellStats>,
}

impl RangeStats {
    /// Stats for a buffer width
    pub fn get(&self, buffer: Decimal) -> Option<&DwellStats> {
        self.buffers.get(&buffer)
    }

    /// Iterate buffers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&Decimal, &DwellStats)> {
        self.buffers.iter()
    }
}

/// Check if either side's price is within `[threshold - buffer, threshold]`
pub fn in_band(observation: &Observation, threshold: f64, buffer: f64) -> bool {
    let lower = threshold - buffer;
    let within = |p: f64| lower <= p && p <= threshold;
    within(observation.yes_price) || within(observation.no_price)
}

/// Dwell statistics for a single buffer width, in one pass
pub fn dwell(observations: &[Observation], threshold: f64, buffer: f64) -> DwellStats {
    let mut in_range = 0usize;
    let mut run = 0usize;
    let mut max_consecutive = 0usize;

    for observation in observations {
        if in_band(observation, threshold, buffer) {
            in_range += 1;
            run += 1;
            max_consecutive = max_consecutive.max(run);
        } else {
            run = 0;
        }
    }

    let in_range_pct = if observations.is_empty() {
        0.0
    } else {
        in_range as f64 / observations.len() as f64 * 100.0
    };

    DwellStats {
        in_range_pct,
        max_consecutive,
    }
}

/// Dwell statistics for every candidate buffer over a pooled sequence
///
/// Returns `None` for an empty sequence.
pub fn range_stats(observations: &[Observation], threshold: f64) -> Option<RangeStats> {
    if observations.is_empty() {
        tracing::debug!("No observations for range analysis");
        return None;
    }

    let buffers = buffer_candidates()
        .map(|(buffer, width)| (buffer, dwell(observations, threshold, width)))
        .collect();

    Some(RangeStats { threshold, buffers })
}

//! Quantile cut points with small-sample fallbacks
//!
//! Each reported percentile is an "exclusive" method cut point of an
//! n-group split. Short series do not have enough samples for a stable cut,
//! so below a per-percentile minimum the maximum sample is reported instead.

use serde::{Deserialize, Serialize};

/// Percentiles reported for movement magnitudes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percentile {
    /// 75th percentile
    P75,
    /// 90th percentile
    P90,
    /// 95th percentile
    P95,
}

/// Where a percentile is cut from the sorted samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantileCut {
    /// Number of equal-probability groups
    pub groups: usize,
    /// 1-based cut point between groups
    pub cut: usize,
    /// Fewest samples for which the cut is taken; below this the max is used
    pub min_samples: usize,
}

/// Cut table for every reported percentile, in `Percentile` declaration order
pub const PERCENTILE_TABLE: [(Percentile, QuantileCut); 3] = [
    (
        Percentile::P75,
        QuantileCut {
            groups: 4,
            cut: 3,
            min_samples: 4,
        },
    ),
    (
        Percentile::P90,
        QuantileCut {
            groups: 10,
            cut: 9,
            min_samples: 10,
        },
    ),
    (
        Percentile::P95,
        QuantileCut {
            groups: 20,
            cut: 19,
            min_samples: 20,
        },
    ),
];

impl Percentile {
    /// Report label
    pub fn label(self) -> &'static str {
        match self {
            Percentile::P75 => "75th percentile",
            Percentile::P90 => "90th percentile",
            Percentile::P95 => "95th percentile",
        }
    }

    /// Cut parameters for this percentile
    pub fn cut(self) -> QuantileCut {
        PERCENTILE_TABLE[self as usize].1
    }

    /// Evaluate on ascending-sorted samples
    ///
    /// Returns the maximum when there are fewer than `min_samples` samples,
    /// and `None` only for an empty slice.
    pub fn of_sorted(self, sorted: &[f64]) -> Option<f64> {
        let max = *sorted.last()?;
        let cut = self.cut();
        if sorted.len() < cut.min_samples {
            return Some(max);
        }
        exclusive_quantile(sorted, cut.groups, cut.cut).or(Some(max))
    }
}

/// Exclusive-method cut point `cut` of `groups` over ascending-sorted data
///
/// Uses `m = len + 1` as the position scale and interpolates linearly
/// between the two neighbouring samples. Needs at least two samples and
/// `0 < cut < groups`.
pub fn exclusive_quantile(sorted: &[f64], groups: usize, cut: usize) -> Option<f64> {
    let len = sorted.len();
    if len < 2 || cut == 0 || cut >= groups {
        return None;
    }

    let n = groups as i64;
    let i = cut as i64;
    let m = len as i64 + 1;

    let j = (i * m / n).clamp(1, len as i64 - 1);
    let delta = i * m - j * n;
    let j = j as usize;

    Some((sorted[j - 1] * (n - delta) as f64 + sorted[j] * delta as f64) / n as f64)
}

//! Statistics module
//!
//! Movement and range-dwell analysis over a pooled observation sequence.
//! Both analyzers read observations in the order given; neither re-sorts
//! by timestamp.

mod movement;
mod quantile;
mod range;

pub use movement::{movement_stats, movements, MovementStats, MIN_MOVEMENTS};
pub use quantile::{exclusive_quantile, Percentile, QuantileCut, PERCENTILE_TABLE};
pub use range::{
    buffer_candidates, dwell, in_band, range_stats, DwellStats, RangeStats,
    BUFFER_CANDIDATE_CENTS, DEFAULT_THRESHOLD,
};

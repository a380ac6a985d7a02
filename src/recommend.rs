//! Buffer recommendation
//!
//! Maps movement statistics to a `TRADE_PRICE_BUFFER` value: the 75th
//! percentile movement, rounded to a cent and clamped into [0.01, 0.05].
//! Range-dwell statistics are required to be present but do not move the
//! result.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::stats::{MovementStats, RangeStats};

/// Returned when either statistics block is absent
pub const FALLBACK_BUFFER: Decimal = Decimal::from_parts(3, 0, 0, false, 2); // 0.03

/// Smallest buffer ever recommended
pub const MIN_BUFFER: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Largest buffer ever recommended
pub const MAX_BUFFER: Decimal = Decimal::from_parts(5, 0, 0, false, 2); // 0.05

/// Decimal places of a recommended buffer
pub const BUFFER_DP: u32 = 2;

/// Round a statistic to whole cents
///
/// Rounds the exact binary value half-to-even, so 0.125 gives 0.12 and
/// 0.035 (stored as 0.0350000000000000033) gives 0.04. Finite values past
/// the 96-bit decimal range saturate to `Decimal::MAX` or `Decimal::MIN`.
/// `None` for non-finite input.
pub fn round_to_cents(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let exact = match Decimal::from_f64_retain(value) {
        Some(d) => d,
        None if value.abs() < 1.0 => Decimal::ZERO,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::MIN,
    };
    Some(exact.round_dp_with_strategy(BUFFER_DP, RoundingStrategy::MidpointNearestEven))
}

/// Recommended buffer for the given statistics
pub fn recommend(movement: Option<&MovementStats>, range: Option<&RangeStats>) -> Decimal {
    let (Some(movement), Some(_)) = (movement, range) else {
        return FALLBACK_BUFFER;
    };

    match round_to_cents(movement.p75) {
        Some(p75) => p75.clamp(MIN_BUFFER, MAX_BUFFER).round_dp(BUFFER_DP),
        None => FALLBACK_BUFFER,
    }
}

/// What the recommended buffer was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBasis {
    /// Clamped 75th percentile movement
    MovementP75,
    /// Fixed default, statistics were insufficient
    Fallback,
}

/// Recommended buffer with alternatives for the operator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Recommended `TRADE_PRICE_BUFFER`
    pub buffer: Decimal,
    pub basis: RecommendationBasis,
    /// Median movement in cents, captures about half of movements
    pub conservative: Option<Decimal>,
    /// 90th percentile movement in cents
    pub aggressive: Option<Decimal>,
}

impl Recommendation {
    /// Build the recommendation and its alternatives
    pub fn build(movement: Option<&MovementStats>, range: Option<&RangeStats>) -> Self {
        let buffer = recommend(movement, range);
        let basis = match (movement, range) {
            (Some(m), Some(_)) if round_to_cents(m.p75).is_some() => {
                RecommendationBasis::MovementP75
            }
            _ => RecommendationBasis::Fallback,
        };

        tracing::info!(buffer = %buffer, basis = ?basis, "Buffer recommended");

        Self {
            buffer,
            basis,
            conservative: movement.and_then(|m| round_to_cents(m.median)),
            aggressive: movement.and_then(|m| round_to_cents(m.p90)),
        }
    }
}

//! Price log module
//!
//! Loads the quote log written by the trading bot into per-market series

mod parser;
mod types;

pub use parser::{parse, parse_line, parse_reader, MIN_FIELDS};
pub use types::{LogError, MarketSeries, Observation, PriceLog};

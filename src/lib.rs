//! poly-buffer: price log analysis for Polymarket up/down markets
//!
//! Recommends the `TRADE_PRICE_BUFFER` used by the time-based second side
//! trigger. This library provides:
//! - Price log parsing into per-market series
//! - Price movement distribution statistics
//! - Range-dwell statistics below the 50 cent threshold
//! - The buffer recommendation rule
//! - Table and JSON reporting

pub mod cli;
pub mod config;
pub mod data;
pub mod recommend;
pub mod report;
pub mod stats;
pub mod telemetry;

//! Price log parser
//!
//! Reads `timestamp,market,slug,yes_price,no_price[,...]` lines. Lines that
//! do not fit that shape are noise from the logger and are dropped without
//! being reported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::types::{LogError, Observation, PriceLog};

/// Minimum number of comma-separated fields in a price line
pub const MIN_FIELDS: usize = 5;

/// Parse a price log file into per-market series
///
/// Malformed lines are skipped. A file with no valid lines gives an empty
/// `PriceLog`; deciding whether that is fatal is left to the caller.
pub fn parse(path: impl AsRef<Path>) -> Result<PriceLog, LogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LogError::NotFound(path.to_path_buf()),
        _ => LogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let log = parse_reader(BufReader::new(file)).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        markets = log.market_count(),
        points = log.total_points(),
        "Parsed price log"
    );

    Ok(log)
}

/// Parse price lines from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<PriceLog> {
    let mut log = PriceLog::new();
    for line in reader.lines() {
        if let Some(observation) = parse_line(&line?) {
            log.push(observation);
        }
    }
    Ok(log)
}

/// Parse a single price line
///
/// Returns `None` for blank lines, lines with fewer than five fields, and
/// lines whose YES/NO fields are not finite numbers.
pub fn parse_line(line: &str) -> Option<Observation> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let yes_price = parse_price(fields[3])?;
    let no_price = parse_price(fields[4])?;

    Some(Observation::new(fields[0], fields[1], fields[2], yes_price, no_price))
}

fn parse_price(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

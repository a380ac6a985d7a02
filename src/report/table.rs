//! Console table rendering

use std::fmt;

use super::AnalysisReport;
use crate::stats::PERCENTILE_TABLE;

const RULE: &str = "════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "─────────────────────────────────────────────";

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reading from: {}", self.log_file.display())?;
        writeln!(f)?;
        writeln!(f, "Found {} market(s)", self.markets.len())?;
        for market in &self.markets {
            write!(
                f,
                "  {}: {} price points ({} contracts",
                market.market, market.points, market.contracts
            )?;
            if let Some(secs) = market.span_secs {
                write!(f, ", {}", format_span(secs))?;
            }
            writeln!(f, ")")?;
        }
        writeln!(f)?;
        writeln!(f, "Total price points: {}", self.total_points)?;

        section(f, "PRICE MOVEMENT ANALYSIS")?;
        match &self.movement {
            Some(m) => {
                writeln!(f, "Mean movement:     {:.4}", m.mean)?;
                writeln!(f, "Median movement:   {:.4}", m.median)?;
                writeln!(f, "Std deviation:     {:.4}", m.stdev)?;
                writeln!(f, "Min movement:      {:.4}", m.min)?;
                writeln!(f, "Max movement:      {:.4}", m.max)?;
                for (percentile, _) in PERCENTILE_TABLE {
                    let label = format!("{}:", percentile.label());
                    writeln!(f, "{label:<19}{:.4}", m.percentile(percentile))?;
                }
            }
            None => writeln!(f, "Insufficient data for movement analysis")?,
        }

        section(
            f,
            &format!("PRICE RANGE ANALYSIS (for threshold = {})", self.threshold),
        )?;
        match &self.range {
            Some(range) => {
                writeln!(
                    f,
                    "{:<10} {:<15} {:<20}",
                    "Buffer", "In Range %", "Max Consecutive"
                )?;
                writeln!(f, "{THIN_RULE}")?;
                for (buffer, dwell) in range.iter() {
                    writeln!(
                        f,
                        "{:<10} {:>6.2}%        {:<20}",
                        format!("{buffer:.2}"),
                        dwell.in_range_pct,
                        dwell.max_consecutive
                    )?;
                }
            }
            None => writeln!(f, "Insufficient data for range analysis")?,
        }

        section(f, "RECOMMENDATION")?;
        let rec = &self.recommendation;
        writeln!(f)?;
        writeln!(f, "Recommended TRADE_PRICE_BUFFER: {:.2}", rec.buffer)?;
        writeln!(f)?;
        writeln!(f, "This value:")?;
        writeln!(f, "  - Captures ~75% of typical price movements")?;
        writeln!(f, "  - Provides a reasonable range for time-based triggers")?;
        writeln!(f, "  - Balances sensitivity with false trigger prevention")?;

        if let (Some(conservative), Some(aggressive)) = (rec.conservative, rec.aggressive) {
            writeln!(f)?;
            writeln!(f, "Alternative considerations:")?;
            writeln!(
                f,
                "  - More conservative (median): {conservative:.2} - captures 50% of movements"
            )?;
            writeln!(
                f,
                "  - More aggressive (p90): {aggressive:.2} - captures 90% of movements"
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")
}

/// Format seconds as `1h 02m 03s`, dropping leading zero units
pub(crate) fn format_span(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{sign}{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{sign}{m}m {s:02}s")
    } else {
        format!("{sign}{s}s")
    }
}

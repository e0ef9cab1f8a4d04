//! Core formatting trait and the plain text report
//!
//! The report layout is fixed: a sample count line, the order statistics,
//! then mean and standard deviation, each value in milliseconds rounded to
//! the nearest tenth.

use crate::{
    error::{AppError, Result},
    models::metrics::LatencySummary,
};
use std::fmt::Write as _;
use std::time::Duration;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Line printed every progress interval during sampling
    fn format_progress(&self, sample_count: usize) -> String;

    /// Final report block
    fn format_report(&self, summary: &LatencySummary) -> Result<String>;
}

/// Round to the nearest 100µs and render as fixed-point milliseconds
///
/// The value is right-aligned to four characters before the unit, so
/// 17ms renders as `17.0 ms` and 1.234ms as ` 1.2 ms`.
pub fn format_millis(duration: Duration) -> String {
    const BUCKET_NANOS: u128 = 100_000;

    // Half a bucket rounds up, matching round-half-away-from-zero.
    let rounded = (duration.as_nanos() + BUCKET_NANOS / 2) / BUCKET_NANOS * BUCKET_NANOS;
    let millis = rounded as f64 / 1_000_000.0;

    format!("{:4.1} ms", millis)
}

/// Plain text formatter implementation
#[derive(Debug, Default, Clone)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_progress(&self, sample_count: usize) -> String {
        format!("{} samples so far...", sample_count)
    }

    fn format_report(&self, summary: &LatencySummary) -> Result<String> {
        let mut output = String::new();
        write_report(&mut output, summary)
            .map_err(|e| AppError::internal(format!("Failed to format report: {}", e)))?;
        Ok(output)
    }
}

fn write_report(output: &mut String, summary: &LatencySummary) -> std::fmt::Result {
    writeln!(output, "Collected {} samples.", summary.sample_count)?;
    writeln!(output)?;
    writeln!(output, "Min:      {}", format_millis(summary.min))?;
    writeln!(output, "p05:      {}", format_millis(summary.p05))?;
    writeln!(output, "p50:      {}", format_millis(summary.p50))?;
    writeln!(output, "p95:      {}", format_millis(summary.p95))?;
    writeln!(output, "Max:      {}", format_millis(summary.max))?;
    writeln!(output)?;
    writeln!(output, "Mean:     {}", format_millis(summary.mean))?;
    writeln!(output, "Std. dev: {}", format_millis(summary.std_dev))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis_exact() {
        assert_eq!(format_millis(Duration::from_micros(17_000)), "17.0 ms");
    }

    #[test]
    fn test_format_millis_rounds_to_tenth() {
        assert_eq!(format_millis(Duration::from_micros(1_234)), " 1.2 ms");
        assert_eq!(format_millis(Duration::from_micros(1_249)), " 1.2 ms");
        assert_eq!(format_millis(Duration::from_micros(1_250)), " 1.3 ms");
        assert_eq!(format_millis(Duration::from_micros(999_960)), "1000.0 ms");
    }

    #[test]
    fn test_format_millis_small_values() {
        assert_eq!(format_millis(Duration::ZERO), " 0.0 ms");
        assert_eq!(format_millis(Duration::from_micros(49)), " 0.0 ms");
        assert_eq!(format_millis(Duration::from_micros(50)), " 0.1 ms");
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(PlainFormatter::new().format_progress(300), "300 samples so far...");
    }

    #[test]
    fn test_report_layout() {
        let ms = |v: u64| Duration::from_micros(v);
        let summary = LatencySummary {
            sample_count: 412,
            min: ms(9_870),
            p05: ms(10_020),
            p50: ms(11_460),
            p95: ms(14_950),
            max: ms(31_010),
            mean: ms(11_870),
            std_dev: ms(1_640),
        };

        let report = PlainFormatter::new().format_report(&summary).unwrap();
        let expected = "\
Collected 412 samples.

Min:       9.9 ms
p05:      10.0 ms
p50:      11.5 ms
p95:      15.0 ms
Max:      31.0 ms

Mean:     11.9 ms
Std. dev:  1.6 ms
";
        assert_eq!(report, expected);
    }
}

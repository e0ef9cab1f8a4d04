//! Descriptive statistics over round-trip samples
//!
//! Every statistic is computed over the samples expressed as fractional
//! seconds and converted back to a [`Duration`] at the end. Each computation
//! returns a [`Result`] so that an empty input, an out-of-range percentile or
//! a value that cannot be represented as a duration surfaces as a
//! [`AppError::Statistics`] instead of a panic.

use crate::{
    error::{AppError, Result},
    models::metrics::{LatencySummary, SampleSet},
};
use std::time::Duration;

/// Statistics calculator over one run's samples
pub struct LatencyStatistics {
    /// Samples in seconds, sorted ascending
    sorted_seconds: Vec<f64>,
}

impl LatencyStatistics {
    /// Prepare a calculator for `samples`
    ///
    /// An empty sample set is rejected here, before any statistic is
    /// attempted.
    pub fn from_samples(samples: &SampleSet) -> Result<Self> {
        if samples.is_empty() {
            return Err(AppError::statistics("no samples collected"));
        }

        let mut sorted_seconds = samples.to_float_seconds();
        sorted_seconds.sort_by(f64::total_cmp);

        Ok(Self { sorted_seconds })
    }

    pub fn sample_count(&self) -> usize {
        self.sorted_seconds.len()
    }

    pub fn min(&self) -> Result<Duration> {
        to_duration(min(&self.sorted_seconds)?)
    }

    pub fn max(&self) -> Result<Duration> {
        to_duration(max(&self.sorted_seconds)?)
    }

    pub fn mean(&self) -> Result<Duration> {
        let data = &self.sorted_seconds;
        // Accumulated rounding can push the mean of equal values past them.
        let mean = mean(data)?.clamp(min(data)?, max(data)?);
        to_duration(mean)
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> Result<Duration> {
        to_duration(population_std_dev(&self.sorted_seconds)?)
    }

    pub fn median(&self) -> Result<Duration> {
        self.percentile(50.0)
    }

    /// Linearly interpolated percentile, `percent` in `[0, 100]`
    pub fn percentile(&self, percent: f64) -> Result<Duration> {
        to_duration(percentile_of_sorted(&self.sorted_seconds, percent)?)
    }

    /// Compute the full report summary
    pub fn summarize(&self) -> Result<LatencySummary> {
        let summary = LatencySummary {
            sample_count: self.sample_count(),
            min: self.min()?,
            p05: self.percentile(5.0)?,
            p50: self.median()?,
            p95: self.percentile(95.0)?,
            max: self.max()?,
            mean: self.mean()?,
            std_dev: self.std_dev()?,
        };

        if !summary.is_ordered() {
            return Err(AppError::internal(format!(
                "order statistics out of order: {:?}",
                summary
            )));
        }
        Ok(summary)
    }
}

/// Summarize a sample set in one call
pub fn summarize(samples: &SampleSet) -> Result<LatencySummary> {
    LatencyStatistics::from_samples(samples)?.summarize()
}

fn ensure_non_empty(data: &[f64], what: &str) -> Result<()> {
    if data.is_empty() {
        Err(AppError::statistics(format!("cannot compute {} of empty input", what)))
    } else {
        Ok(())
    }
}

/// Smallest value
pub fn min(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "minimum")?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest value
pub fn max(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "maximum")?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "mean")?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Standard deviation dividing by `n`, not `n - 1`
pub fn population_std_dev(data: &[f64]) -> Result<f64> {
    let mean = mean(data)?;
    let variance = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    Ok(variance.sqrt())
}

/// Percentile of ascending data, interpolating between the two nearest ranks
fn percentile_of_sorted(sorted: &[f64], percent: f64) -> Result<f64> {
    ensure_non_empty(sorted, "percentile")?;
    if !(0.0..=100.0).contains(&percent) {
        return Err(AppError::statistics(format!(
            "percentile must be between 0 and 100, got {}",
            percent
        )));
    }

    let rank = percent / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    let (low, high) = (sorted[lower], sorted[upper]);
    Ok((low + (high - low) * fraction).clamp(low, high))
}

fn to_duration(seconds: f64) -> Result<Duration> {
    Ok(Duration::try_from_secs_f64(seconds)?)
}

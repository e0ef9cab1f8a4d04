//! Latency samples and the summary computed from them

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ordered, append-only sequence of round-trip samples
///
/// Samples keep the order in which their round-trips completed. Warm-up pings
/// never enter the set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    samples: Vec<Duration>,
}

impl SampleSet {
    /// Create an empty sample set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed round-trip
    pub fn push(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    /// Number of retained samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples as fractional seconds, the unit statistics are computed in
    pub fn to_float_seconds(&self) -> Vec<f64> {
        self.samples.iter().map(Duration::as_secs_f64).collect()
    }
}

impl From<Vec<Duration>> for SampleSet {
    fn from(samples: Vec<Duration>) -> Self {
        Self { samples }
    }
}

impl FromIterator<Duration> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// Descriptive statistics over one run's samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    /// Number of samples the summary was computed from
    pub sample_count: usize,
    pub min: Duration,
    /// 5th percentile
    pub p05: Duration,
    /// Median
    pub p50: Duration,
    /// 95th percentile
    pub p95: Duration,
    pub max: Duration,
    pub mean: Duration,
    /// Population standard deviation
    pub std_dev: Duration,
}

impl LatencySummary {
    /// Check min <= p05 <= p50 <= p95 <= max
    pub fn is_ordered(&self) -> bool {
        self.min <= self.p05 && self.p05 <= self.p50 && self.p50 <= self.p95 && self.p95 <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_set_preserves_order() {
        let mut set = SampleSet::new();
        set.push(Duration::from_millis(3));
        set.push(Duration::from_millis(1));
        set.push(Duration::from_millis(2));

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_float_seconds(), vec![0.003, 0.001, 0.002]);
    }

    #[test]
    fn test_to_float_seconds() {
        let set = SampleSet::from(vec![Duration::from_millis(1500), Duration::from_micros(250)]);
        assert_eq!(set.to_float_seconds(), vec![1.5, 0.00025]);
    }

    #[test]
    fn test_empty_set() {
        let set: SampleSet = std::iter::empty().collect();
        assert!(set.is_empty());
        assert!(set.to_float_seconds().is_empty());
    }

    #[test]
    fn test_summary_ordering_check() {
        let ms = Duration::from_millis;
        let mut summary = LatencySummary {
            sample_count: 5,
            min: ms(1),
            p05: ms(1),
            p50: ms(3),
            p95: ms(5),
            max: ms(5),
            mean: ms(3),
            std_dev: ms(1),
        };
        assert!(summary.is_ordered());

        summary.p50 = ms(6);
        assert!(!summary.is_ordered());
    }
}

//! Running statistics over a numeric stream.
//!
//! [`RunningStats`] maintains count, mean, variance, min and max in a single
//! pass using Welford's online update. The plain sum-of-squares formula loses
//! precision on long streams with large means, and collecting values for a
//! final pass would break the bounded-memory model, so neither is used here.

use serde::Serialize;

/// Online accumulator for per-column numeric statistics.
///
/// O(1) memory regardless of how many values are added. Callers are expected
/// to feed finite values only; [`crate::classify::coerce_numeric`] already
/// rejects NaN and infinities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl RunningStats {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation.
    pub fn add(&mut self, x: f64) {
        self.count += 1;
        self.min = Some(self.min.map_or(x, |m| m.min(x)));
        self.max = Some(self.max.map_or(x, |m| m.max(x)));

        // Welford's update.
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2;
    }

    /// Number of observations.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether no observations have been added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sample variance (Bessel-corrected). Defined as 0 for a single
    /// observation, not as undefined.
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Pure read of the accumulated statistics.
    ///
    /// An empty accumulator reads as `{count: 0}` with no other fields; with
    /// at least one observation all five fields are present. Downstream JSON
    /// consumers rely on that shape, so the optional fields are skipped when
    /// empty rather than emitted as nulls.
    pub fn summary(&self) -> StatsSummary {
        if self.count == 0 {
            return StatsSummary {
                count: 0,
                min: None,
                max: None,
                mean: None,
                stddev: None,
            };
        }
        StatsSummary {
            count: self.count,
            min: self.min,
            max: self.max,
            mean: Some(self.mean),
            stddev: Some(self.variance().sqrt()),
        }
    }
}

/// Serializable read-out of a [`RunningStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Number of numeric observations.
    pub count: u64,
    /// Smallest observation, absent when `count == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest observation, absent when `count == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Arithmetic mean, absent when `count == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Sample standard deviation, absent when `count == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev: Option<f64>,
}

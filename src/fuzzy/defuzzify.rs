//! Height defuzzification
//!
//! Each output label is represented by the centroid of a discretized range
//! (the mean of an inclusive integer sequence). The crisp result is the
//! strength-weighted mean of those centroids over every rule that fired.

use serde::Serialize;
use tracing::{debug, warn};

use super::rules::Activation;

/// Label whose centroid is used when no rule fires
pub const FALLBACK_LABEL: &str = "low";

/// Discretized range of an output label, inclusive, step 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputRange {
    pub label: &'static str,
    pub low: i32,
    pub high: i32,
}

impl OutputRange {
    pub const fn new(label: &'static str, low: i32, high: i32) -> Self {
        Self { label, low, high }
    }

    /// Number of samples in the range
    pub fn len(&self) -> usize {
        if self.high < self.low {
            0
        } else {
            (self.high - self.low) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arithmetic mean of the samples; NaN for an empty range
    pub fn centroid(&self) -> f64 {
        let sum: f64 = (self.low..=self.high).map(f64::from).sum();
        sum / self.len() as f64
    }
}

fn centroid_of(ranges: &[OutputRange], label: &str) -> Option<f64> {
    ranges
        .iter()
        .find(|range| range.label == label)
        .map(OutputRange::centroid)
}

/// Centroid used when nothing fires. Falls back to the first range if the
/// table has no `low` entry.
pub fn fallback_centroid(ranges: &[OutputRange]) -> f64 {
    centroid_of(ranges, FALLBACK_LABEL)
        .or_else(|| ranges.first().map(OutputRange::centroid))
        .unwrap_or(f64::NAN)
}

/// Sums accumulated over the activations that fired
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeightedSum {
    pub numerator: f64,
    pub denominator: f64,
}

impl WeightedSum {
    pub fn accumulate(activations: &[Activation], ranges: &[OutputRange]) -> Self {
        let mut sum = Self::default();
        for activation in activations {
            if activation.strength > 0.0 {
                let Some(centroid) = centroid_of(ranges, activation.label) else {
                    warn!(label = activation.label, "no output range for label, skipping");
                    continue;
                };
                sum.numerator += activation.strength * centroid;
                sum.denominator += activation.strength;
            }
        }
        sum
    }

    /// True when no rule contributed any weight
    pub fn is_empty(&self) -> bool {
        self.denominator == 0.0
    }
}

/// Collapse rule activations into one crisp value
pub fn defuzzify(activations: &[Activation], ranges: &[OutputRange]) -> f64 {
    let sum = WeightedSum::accumulate(activations, ranges);
    if sum.is_empty() {
        let fallback = fallback_centroid(ranges);
        debug!(fallback, "no rule fired, using fallback centroid");
        fallback
    } else {
        sum.numerator / sum.denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const RANGES: &[OutputRange] = &[
        OutputRange::new("low", 50, 90),
        OutputRange::new("normal", 70, 110),
        OutputRange::new("high", 100, 160),
    ];

    fn act(label: &'static str, strength: f64) -> Activation {
        Activation { label, strength }
    }

    #[test]
    fn test_centroids() {
        assert_eq!(RANGES[0].centroid(), 70.0);
        assert_eq!(RANGES[1].centroid(), 90.0);
        assert_eq!(RANGES[2].centroid(), 130.0);
        assert_eq!(OutputRange::new("high", 100, 200).centroid(), 150.0);
        assert_eq!(RANGES[2].len(), 61);
    }

    #[test]
    fn test_empty_range_centroid_is_nan() {
        let range = OutputRange::new("x", 10, 5);
        assert!(range.is_empty());
        assert!(range.centroid().is_nan());
    }

    #[test]
    fn test_weighted_mean() {
        let out = defuzzify(&[act("low", 0.5), act("normal", 0.5)], RANGES);
        assert_abs_diff_eq!(out, 80.0);

        let out = defuzzify(&[act("normal", 0.25), act("high", 0.75)], RANGES);
        assert_abs_diff_eq!(out, 120.0);
    }

    #[test]
    fn test_repeated_labels_accumulate() {
        let out = defuzzify(&[act("high", 1.0), act("high", 1.0), act("low", 0.0)], RANGES);
        assert_abs_diff_eq!(out, 130.0);
    }

    #[test]
    fn test_nothing_fired_uses_low_centroid() {
        let out = defuzzify(&[act("low", 0.0), act("high", 0.0)], RANGES);
        assert_eq!(out, 70.0);
        assert_eq!(defuzzify(&[], RANGES), 70.0);
    }

    #[test]
    fn test_unknown_label_is_skipped() {
        let out = defuzzify(&[act("extreme", 1.0), act("normal", 1.0)], RANGES);
        assert_abs_diff_eq!(out, 90.0);
    }

    #[test]
    fn test_fallback_without_low_entry() {
        let ranges = [OutputRange::new("normal", 70, 110)];
        assert_eq!(fallback_centroid(&ranges), 90.0);
        assert!(fallback_centroid(&[]).is_nan());
    }
}

//! Blood-sugar prediction
//!
//! Wires the fuzzifiers, the rule engine and the defuzzifier together:
//!
//! ```text
//! (age, bmi, activity) -> fuzzify -> apply_rules -> defuzzify -> blood sugar
//! ```
//!
//! Prediction is a pure function of its three inputs and the selected profile.
//! No input validation happens here; any finite input produces a number.

use serde::Serialize;
use tracing::debug;

use crate::fuzzy::{
    apply_rules, defuzzify, fuzzify_activity, fuzzify_age, fuzzify_bmi, Activation, Degrees,
    Profile, ProfileKind, WeightedSum,
};

/// Predict blood sugar with the standard profile
pub fn predict(age: f64, bmi: f64, activity: f64) -> f64 {
    Predictor::default().predict(age, bmi, activity)
}

/// Full record of one inference run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inference {
    pub profile: ProfileKind,
    pub age: Degrees,
    pub bmi: Degrees,
    pub activity: Degrees,
    pub activations: Vec<Activation>,
    /// True when no rule fired and the fallback centroid was returned
    pub fallback: bool,
    pub output: f64,
}

/// Predictor bound to one profile
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    profile: &'static Profile,
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(ProfileKind::Standard)
    }
}

impl Predictor {
    pub fn new(kind: ProfileKind) -> Self {
        Self {
            profile: kind.profile(),
        }
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    pub fn predict(&self, age: f64, bmi: f64, activity: f64) -> f64 {
        self.infer(age, bmi, activity).output
    }

    /// Run the pipeline and keep every intermediate result
    pub fn infer(&self, age: f64, bmi: f64, activity: f64) -> Inference {
        let age_degrees = fuzzify_age(age);
        let bmi_degrees = fuzzify_bmi(bmi);
        let activity_degrees = fuzzify_activity(activity);

        let activations = apply_rules(
            self.profile.rules,
            &age_degrees,
            &bmi_degrees,
            &activity_degrees,
        );

        let fallback = WeightedSum::accumulate(&activations, self.profile.ranges).is_empty();
        let output = defuzzify(&activations, self.profile.ranges);

        debug!(
            profile = self.profile.name(),
            age,
            bmi,
            activity,
            output,
            fallback,
            "predicted blood sugar"
        );

        Inference {
            profile: self.profile.kind,
            age: age_degrees,
            bmi: bmi_degrees,
            activity: activity_degrees,
            activations,
            fallback,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_standard_golden_values() {
        assert_eq!(predict(30.0, 20.0, 5.0), 100.0);
        assert_eq!(predict(70.0, 40.0, 1.0), 130.0);
        assert_abs_diff_eq!(predict(37.5, 22.0, 7.5), 80.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extended_golden_values() {
        let predictor = Predictor::new(ProfileKind::Extended);
        assert_eq!(predictor.predict(30.0, 20.0, 5.0), 90.0);
        assert_eq!(predictor.predict(70.0, 40.0, 1.0), 150.0);
    }

    #[test]
    fn test_profiles_are_distinct() {
        let standard = Predictor::new(ProfileKind::Standard);
        let extended = Predictor::new(ProfileKind::Extended);
        assert_ne!(
            standard.predict(30.0, 20.0, 5.0),
            extended.predict(30.0, 20.0, 5.0)
        );
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let first = predict(42.3, 27.1, 6.4);
        for _ in 0..100 {
            assert_eq!(predict(42.3, 27.1, 6.4).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_no_rule_fires_within_domain() {
        let inference = Predictor::default().infer(50.0, 22.0, 9.5);
        assert!(inference.fallback);
        assert!(inference.activations.iter().all(|a| a.strength == 0.0));
        assert_eq!(inference.output, 70.0);
    }

    #[test]
    fn test_out_of_domain_inputs_fall_back() {
        assert_eq!(predict(-5.0, 5.0, -1.0), 70.0);
        assert_eq!(predict(250.0, 80.0, 20.0), 70.0);
    }

    #[test]
    fn test_inference_trace() {
        let inference = Predictor::default().infer(37.5, 22.0, 7.5);
        assert_eq!(inference.profile, ProfileKind::Standard);
        assert_eq!(inference.activations.len(), 5);
        assert_abs_diff_eq!(inference.age["young"], 0.5);
        assert_eq!(inference.bmi["normal"], 1.0);
        assert_eq!(inference.activity["moderate"], 1.0);
        let strengths: Vec<_> = inference.activations.iter().map(|a| a.strength).collect();
        assert_eq!(strengths, vec![0.5, 0.5, 0.0, 0.0, 0.0]);
        assert!(!inference.fallback);
    }

    #[test]
    fn test_activation_count_per_profile() {
        for (kind, expected) in [(ProfileKind::Standard, 5), (ProfileKind::Extended, 9)] {
            let inference = Predictor::new(kind).infer(12.0, 33.0, 3.0);
            assert_eq!(inference.activations.len(), expected);
        }
    }

    #[test]
    fn test_inference_serializes() {
        let inference = Predictor::default().infer(30.0, 20.0, 5.0);
        let json = serde_json::to_value(&inference).unwrap();
        assert_eq!(json["profile"], "standard");
        assert_eq!(json["output"], 100.0);
        assert_eq!(json["activations"][0]["label"], "low");
        assert_eq!(json["age"]["young"], 1.0);
    }

    proptest! {
        #[test]
        fn prop_output_within_centroid_span(
            age in 0.0f64..=100.0,
            bmi in 10.0f64..=45.0,
            activity in 0.0f64..=10.0,
        ) {
            for kind in ProfileKind::ALL {
                let predictor = Predictor::new(kind);
                let out = predictor.predict(age, bmi, activity);
                let centroids: Vec<f64> =
                    predictor.profile().ranges.iter().map(|r| r.centroid()).collect();
                let lo = centroids.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = centroids.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(out >= lo - 1e-9 && out <= hi + 1e-9);
            }
        }

        #[test]
        fn prop_firing_strengths_bounded(
            age in -20.0f64..120.0,
            bmi in 0.0f64..60.0,
            activity in -2.0f64..12.0,
        ) {
            let inference = Predictor::new(ProfileKind::Extended).infer(age, bmi, activity);
            for activation in &inference.activations {
                prop_assert!((0.0..=1.0).contains(&activation.strength));
            }
        }
    }
}

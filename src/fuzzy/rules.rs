//! Fuzzy rule evaluation
//!
//! A rule references one or more input terms, combines their degrees with a
//! t-norm (AND, minimum) or t-conorm (OR, maximum) and yields a firing strength
//! for one output label. Rules are evaluated in table order and every rule
//! produces exactly one activation; nothing is merged or deduplicated here.

use serde::Serialize;
use tracing::trace;

use super::variable::Degrees;

/// Input variable a rule antecedent refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    Age,
    Bmi,
    Activity,
}

/// How antecedent degrees are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Combinator {
    /// Minimum t-norm
    And,
    /// Maximum t-conorm
    Or,
}

impl Combinator {
    pub fn combine(&self, degrees: impl IntoIterator<Item = f64>) -> f64 {
        match self {
            Combinator::And => degrees.into_iter().fold(1.0, f64::min),
            Combinator::Or => degrees.into_iter().fold(0.0, f64::max),
        }
    }
}

/// A rule antecedent: `<input> is <label>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Antecedent {
    pub input: Input,
    pub label: &'static str,
}

impl Antecedent {
    pub const fn new(input: Input, label: &'static str) -> Self {
        Self { input, label }
    }
}

/// A fixed fuzzy rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rule {
    /// Output label this rule supports
    pub output: &'static str,
    pub combinator: Combinator,
    pub antecedents: &'static [Antecedent],
}

impl Rule {
    pub const fn and(output: &'static str, antecedents: &'static [Antecedent]) -> Self {
        Self {
            output,
            combinator: Combinator::And,
            antecedents,
        }
    }

    pub const fn or(output: &'static str, antecedents: &'static [Antecedent]) -> Self {
        Self {
            output,
            combinator: Combinator::Or,
            antecedents,
        }
    }

    /// Firing strength of this rule for the given input degrees
    pub fn fire(&self, inputs: &InputDegrees<'_>) -> f64 {
        self.combinator
            .combine(self.antecedents.iter().map(|ant| inputs.degree(ant)))
    }
}

/// Degree maps of the three inputs for one prediction
#[derive(Debug, Clone, Copy)]
pub struct InputDegrees<'a> {
    pub age: &'a Degrees,
    pub bmi: &'a Degrees,
    pub activity: &'a Degrees,
}

impl InputDegrees<'_> {
    /// Degree of an antecedent; unknown labels read as 0
    pub fn degree(&self, antecedent: &Antecedent) -> f64 {
        let degrees = match antecedent.input {
            Input::Age => self.age,
            Input::Bmi => self.bmi,
            Input::Activity => self.activity,
        };
        degrees.get(antecedent.label).copied().unwrap_or(0.0)
    }
}

/// Result of firing one rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Activation {
    pub label: &'static str,
    pub strength: f64,
}

/// Evaluate every rule against the input degrees, one activation per rule
pub fn apply_rules(
    rules: &[Rule],
    age: &Degrees,
    bmi: &Degrees,
    activity: &Degrees,
) -> Vec<Activation> {
    let inputs = InputDegrees { age, bmi, activity };
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let strength = rule.fire(&inputs);
            trace!(rule = i + 1, label = rule.output, strength, "rule fired");
            Activation {
                label: rule.output,
                strength,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::variable::{fuzzify_activity, fuzzify_age, fuzzify_bmi};

    const YOUNG_OR_LOW: Rule = Rule::or(
        "low",
        &[Antecedent::new(Input::Age, "young"), Antecedent::new(Input::Bmi, "low")],
    );

    const MIDDLE_AND_MODERATE: Rule = Rule::and(
        "normal",
        &[
            Antecedent::new(Input::Age, "middle_aged"),
            Antecedent::new(Input::Activity, "moderate"),
        ],
    );

    #[test]
    fn test_combinators() {
        assert_eq!(Combinator::And.combine([0.6, 0.4, 0.9]), 0.4);
        assert_eq!(Combinator::Or.combine([0.6, 0.4, 0.9]), 0.9);
    }

    #[test]
    fn test_or_rule_takes_maximum() {
        let age = fuzzify_age(37.5);
        let bmi = fuzzify_bmi(19.25);
        let activity = fuzzify_activity(5.0);
        let out = apply_rules(&[YOUNG_OR_LOW], &age, &bmi, &activity);
        assert_eq!(out, vec![Activation { label: "low", strength: 0.5 }]);
    }

    #[test]
    fn test_and_rule_takes_minimum() {
        let age = fuzzify_age(37.5);
        let bmi = fuzzify_bmi(22.0);
        let activity = fuzzify_activity(7.5);
        let out = apply_rules(&[MIDDLE_AND_MODERATE], &age, &bmi, &activity);
        assert_eq!(out[0].strength, 0.5);
    }

    #[test]
    fn test_one_activation_per_rule_in_order() {
        let age = fuzzify_age(50.0);
        let bmi = fuzzify_bmi(22.0);
        let activity = fuzzify_activity(7.5);
        let rules = [YOUNG_OR_LOW, MIDDLE_AND_MODERATE, YOUNG_OR_LOW];
        let out = apply_rules(&rules, &age, &bmi, &activity);
        let labels: Vec<_> = out.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["low", "normal", "low"]);
        assert_eq!(out[1].strength, 1.0);
    }

    #[test]
    fn test_unknown_label_reads_as_zero() {
        const OBESE: Rule = Rule::or("high", &[Antecedent::new(Input::Bmi, "obese")]);
        let age = fuzzify_age(50.0);
        let bmi = fuzzify_bmi(40.0);
        let activity = fuzzify_activity(2.0);
        let out = apply_rules(&[OBESE], &age, &bmi, &activity);
        assert_eq!(out[0].strength, 0.0);
    }
}

//! Linguistic variables and the fixed input vocabularies
//!
//! A linguistic variable names a scalar domain and partitions it into ordered,
//! overlapping trapezoidal terms. Fuzzifying a crisp value yields one degree per
//! term, in declaration order.

use indexmap::IndexMap;
use serde::Serialize;

use super::membership::Trapezoid;

/// Label -> membership degree, in term declaration order
pub type Degrees = IndexMap<&'static str, f64>;

/// A labelled fuzzy set of a linguistic variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Term {
    pub label: &'static str,
    pub shape: Trapezoid,
}

impl Term {
    pub const fn new(label: &'static str, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            label,
            shape: Trapezoid::new(a, b, c, d),
        }
    }
}

/// A linguistic variable with associated fuzzy sets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinguisticVariable {
    /// Variable name (e.g., "age")
    pub name: &'static str,
    /// Universe of discourse
    pub universe: (f64, f64),
    /// Terms in declaration order
    pub terms: &'static [Term],
}

impl LinguisticVariable {
    /// Fuzzify a crisp value - get membership for all terms
    pub fn fuzzify(&self, value: f64) -> Degrees {
        self.terms
            .iter()
            .map(|term| (term.label, term.shape.evaluate(value)))
            .collect()
    }

    /// Look up a term by label
    pub fn term(&self, label: &str) -> Option<&Term> {
        self.terms.iter().find(|term| term.label == label)
    }

    /// Labels in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|term| term.label)
    }

    /// Get the term with highest membership for a value.
    ///
    /// Ties go to the earlier term. Returns `None` when no term has a
    /// positive degree.
    pub fn dominant_term(&self, value: f64) -> Option<(&'static str, f64)> {
        let mut best: Option<(&'static str, f64)> = None;
        for term in self.terms {
            let degree = term.shape.evaluate(value);
            if degree > best.map_or(0.0, |(_, d)| d) {
                best = Some((term.label, degree));
            }
        }
        best
    }
}

pub const AGE: LinguisticVariable = LinguisticVariable {
    name: "age",
    universe: (0.0, 100.0),
    terms: &[
        Term::new("young", 0.0, 0.0, 30.0, 45.0),
        Term::new("middle_aged", 30.0, 45.0, 55.0, 70.0),
        Term::new("old", 55.0, 70.0, 100.0, 100.0),
    ],
};

pub const BMI: LinguisticVariable = LinguisticVariable {
    name: "bmi",
    universe: (10.0, 45.0),
    terms: &[
        Term::new("low", 10.0, 10.0, 18.5, 20.0),
        Term::new("normal", 18.5, 20.0, 25.0, 30.0),
        Term::new("high", 25.0, 30.0, 45.0, 45.0),
    ],
};

pub const ACTIVITY: LinguisticVariable = LinguisticVariable {
    name: "activity",
    universe: (0.0, 10.0),
    terms: &[
        Term::new("sedentary", 0.0, 0.0, 5.0, 7.0),
        Term::new("moderate", 5.0, 7.0, 8.0, 9.0),
        Term::new("active", 8.0, 9.0, 10.0, 10.0),
    ],
};

pub fn fuzzify_age(age: f64) -> Degrees {
    AGE.fuzzify(age)
}

pub fn fuzzify_bmi(bmi: f64) -> Degrees {
    BMI.fuzzify(bmi)
}

pub fn fuzzify_activity(activity: f64) -> Degrees {
    ACTIVITY.fuzzify(activity)
}

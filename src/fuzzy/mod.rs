//! Fuzzy inference primitives
//!
//! - [`membership`] - trapezoidal membership functions
//! - [`variable`] - linguistic variables and the input vocabularies
//! - [`rules`] - rule representation and firing
//! - [`defuzzify`] - height defuzzification over discretized output ranges
//! - [`profile`] - the built-in rule bases

pub mod defuzzify;
pub mod membership;
pub mod profile;
pub mod rules;
pub mod variable;

pub use defuzzify::{defuzzify, fallback_centroid, OutputRange, WeightedSum, FALLBACK_LABEL};
pub use membership::{trapezoid, Trapezoid};
pub use profile::{fuzzify_blood_sugar, Profile, ProfileKind, EXTENDED, STANDARD};
pub use rules::{apply_rules, Activation, Antecedent, Combinator, Input, InputDegrees, Rule};
pub use variable::{
    fuzzify_activity, fuzzify_age, fuzzify_bmi, Degrees, LinguisticVariable, Term, ACTIVITY, AGE,
    BMI,
};

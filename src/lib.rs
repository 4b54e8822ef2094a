//! glycemia - fuzzy blood-sugar estimation
//!
//! Estimates a blood-sugar value from age, body-mass index and activity level
//! with a Mamdani-style fuzzy inference pipeline:
//!
//! 1. each crisp input is fuzzified against fixed trapezoidal terms
//! 2. a fixed rule base combines term degrees with min (AND) or max (OR)
//! 3. the rule activations are collapsed by height defuzzification
//!
//! Two rule bases ship as [`ProfileKind::Standard`] and
//! [`ProfileKind::Extended`]. Prediction never fails; input validation for
//! user-facing callers lives in [`validation`].
//!
//! # Example
//!
//! ```rust
//! use glycemia::{predict, Predictor, ProfileKind};
//!
//! assert_eq!(predict(30.0, 20.0, 5.0), 100.0);
//!
//! let extended = Predictor::new(ProfileKind::Extended);
//! assert_eq!(extended.predict(70.0, 40.0, 1.0), 150.0);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fuzzy;
pub mod predictor;
pub mod validation;

pub use crate::config::{ConfigError, GlycemiaConfig, LogLevel, OutputFormat};
pub use crate::diagnostics::{linspace, membership_curve, simulate, MembershipCurve, SimulationStep};
pub use crate::error::{Error, ErrorCode, ErrorResponse, Result};
pub use crate::fuzzy::{
    apply_rules, defuzzify, fuzzify_activity, fuzzify_age, fuzzify_blood_sugar, fuzzify_bmi,
    trapezoid, Activation, Degrees, LinguisticVariable, OutputRange, Profile, ProfileKind, Rule,
};
pub use crate::predictor::{predict, Inference, Predictor};
pub use crate::validation::{parse_inputs, InputField, Inputs, ValidationError};

//! Input validation for caller-supplied text
//!
//! The inference core accepts any finite number. Front ends that take raw
//! user input run it through here first: the text must look like a plain
//! decimal number and the value must fall inside the field's domain.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static FLOAT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn float_pattern() -> &'static Regex {
    FLOAT_PATTERN.get_or_init(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid float regex"))
}

/// Validation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Wrong data type. Should be float. Try again!")]
    NotANumber { field: Option<InputField>, input: String },

    #[error("Value should be in range:  {low} - {high}")]
    OutOfRange {
        field: Option<InputField>,
        value: f64,
        low: f64,
        high: f64,
    },

    #[error("Lower boundaries grated than higher boundaries (LOW={low} > HIGH={high})")]
    InvalidBounds { low: f64, high: f64 },
}

impl ValidationError {
    /// Field the error refers to, if known
    pub fn field(&self) -> Option<InputField> {
        match self {
            ValidationError::NotANumber { field, .. } | ValidationError::OutOfRange { field, .. } => {
                *field
            }
            ValidationError::InvalidBounds { .. } => None,
        }
    }

    fn with_field(self, input: InputField) -> Self {
        match self {
            ValidationError::NotANumber { input: text, .. } => ValidationError::NotANumber {
                field: Some(input),
                input: text,
            },
            ValidationError::OutOfRange {
                value, low, high, ..
            } => ValidationError::OutOfRange {
                field: Some(input),
                value,
                low,
                high,
            },
            other => other,
        }
    }
}

/// Parse text as a plain decimal number
pub fn validate_float(text: &str) -> Result<f64, ValidationError> {
    let not_a_number = || ValidationError::NotANumber {
        field: None,
        input: text.to_string(),
    };
    if !float_pattern().is_match(text) {
        return Err(not_a_number());
    }
    text.parse::<f64>().map_err(|_| not_a_number())
}

/// Check `low <= value <= high`
pub fn validate_in_range(value: f64, low: f64, high: f64) -> Result<f64, ValidationError> {
    if low > high {
        return Err(ValidationError::InvalidBounds { low, high });
    }
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field: None,
            value,
            low,
            high,
        })
    }
}

/// The three crisp inputs of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Age,
    Bmi,
    Activity,
}

impl InputField {
    pub const ALL: [InputField; 3] = [InputField::Age, InputField::Bmi, InputField::Activity];

    /// Accepted domain, inclusive
    pub fn domain(&self) -> (f64, f64) {
        match self {
            InputField::Age => (0.0, 100.0),
            InputField::Bmi => (10.0, 45.0),
            InputField::Activity => (0.0, 10.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Age => "age",
            InputField::Bmi => "bmi",
            InputField::Activity => "activity",
        }
    }

    /// Parse and range-check text for this field
    pub fn parse(&self, text: &str) -> Result<f64, ValidationError> {
        let (low, high) = self.domain();
        validate_float(text)
            .and_then(|value| validate_in_range(value, low, high))
            .map_err(|e| e.with_field(*self))
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated prediction inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inputs {
    pub age: f64,
    pub bmi: f64,
    pub activity: f64,
}

/// Validate all three fields in order, stopping at the first failure
pub fn parse_inputs(age: &str, bmi: &str, activity: &str) -> Result<Inputs, ValidationError> {
    Ok(Inputs {
        age: InputField::Age.parse(age)?,
        bmi: InputField::Bmi.parse(bmi)?,
        activity: InputField::Activity.parse(activity)?,
    })
}

/// Round for display, three decimals
pub fn round_display(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

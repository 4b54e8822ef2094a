//! Error handling for glycemia
//!
//! The inference core never fails. Errors only arise at the edges: validating
//! user-supplied input and loading configuration. Both are gathered into
//! [`Error`], which carries a stable [`ErrorCode`] and converts into a
//! JSON-friendly [`ErrorResponse`] for machine-readable CLI output.
//!
//! # Error Categories
//!
//! - `Validation` - input text is not a number or is outside its domain
//! - `Config` - configuration file could not be read, parsed or written

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

// ============================================================================
// Error Codes
// ============================================================================

/// Unique error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    /// Input text is not a plain decimal number
    NotANumber = 1000,
    /// Value outside the field's domain
    OutOfRange = 1001,
    /// Range bounds given in the wrong order
    InvalidBounds = 1002,

    // Configuration errors (2xxx)
    /// Config file could not be read or written
    ConfigIo = 2000,
    /// Config file is not valid TOML for the schema
    ConfigParse = 2001,
    /// Config could not be serialized
    ConfigSerialize = 2002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a short description of the error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::NotANumber => "Input is not a number",
            ErrorCode::OutOfRange => "Value out of range",
            ErrorCode::InvalidBounds => "Invalid range bounds",
            ErrorCode::ConfigIo => "Configuration I/O error",
            ErrorCode::ConfigParse => "Configuration parse error",
            ErrorCode::ConfigSerialize => "Configuration serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{:04}: {}", self.code(), self.description())
    }
}

// ============================================================================
// Error type
// ============================================================================

/// Top-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Validation(ValidationError::NotANumber { .. }) => ErrorCode::NotANumber,
            Error::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            Error::Validation(ValidationError::InvalidBounds { .. }) => ErrorCode::InvalidBounds,
            Error::Config(ConfigError::Io { .. }) => ErrorCode::ConfigIo,
            Error::Config(ConfigError::Parse { .. }) => ErrorCode::ConfigParse,
            Error::Config(ConfigError::Serialize(_)) => ErrorCode::ConfigSerialize,
        }
    }
}

/// A Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Structured response
// ============================================================================

/// Structured error report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator
    pub error: bool,
    /// Error code (string form)
    pub code: ErrorCode,
    /// Numeric error code
    pub code_num: u32,
    /// Error message
    pub message: String,
    /// Input field the error refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let field = match err {
            Error::Validation(v) => v.field().map(|f| f.as_str().to_string()),
            Error::Config(_) => None,
        };
        Self {
            error: true,
            code: err.code(),
            code_num: err.code().code(),
            message: err.to_string(),
            field,
        }
    }
}

impl ErrorResponse {
    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"error":true,"message":"{}"}}"#, self.message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::InputField;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::NotANumber.code(), 1000);
        assert_eq!(ErrorCode::ConfigParse.code(), 2001);
        assert_eq!(ErrorCode::OutOfRange.to_string(), "E1001: Value out of range");
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: Error = InputField::Age.parse("abc").unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::NotANumber);
        assert_eq!(err.to_string(), "Wrong data type. Should be float. Try again!");
    }

    #[test]
    fn test_error_response_json() {
        let err: Error = InputField::Bmi.parse("50").unwrap_err().into();
        let response = ErrorResponse::from(&err);
        let json: serde_json::Value = serde_json::from_str(&response.to_json()).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["code"], "OUT_OF_RANGE");
        assert_eq!(json["code_num"], 1001);
        assert_eq!(json["field"], "bmi");
    }

    #[test]
    fn test_config_error_code() {
        let err: Error = ConfigError::Serialize("boom".into()).into();
        assert_eq!(err.code(), ErrorCode::ConfigSerialize);
        assert!(ErrorResponse::from(&err).field.is_none());
    }
}

//! Core calculator engine
//!
//! The engine is a closed state machine: every button press is a [`Token`],
//! every failure is a [`CalcError`] that the engine turns into an error
//! display instead of returning it to the caller.

mod engine;
pub mod format;
mod operations;
mod token;

pub use engine::CalculatorState;
pub use operations::Operator;
pub use token::{Digit, ParseTokenError, Token};

use serde::Serialize;
use thiserror::Error;

/// Result type for engine operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Display marker for generic failures
pub const ERROR_MARKER: &str = "Error";
/// Display marker for a square root of a negative value
pub const INVALID_INPUT_MARKER: &str = "Invalid input";
/// Display marker for a binary conversion of a fractional value
pub const NOT_INTEGER_MARKER: &str = "Not integer";

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum CalcError {
    /// The display could not be read as a finite number
    #[error("Cannot read display as a number: {0:?}")]
    ParseFailure(String),
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity or NaN)
    #[error("Overflow: result is not a finite number")]
    Overflow,
    /// Square root of a negative value
    #[error("Square root of a negative number")]
    NegativeSquareRoot,
    /// Binary conversion of a value with a fractional part
    #[error("Binary conversion needs an integer")]
    NonIntegerForBinary,
}

impl CalcError {
    /// Returns the text shown on the display while this error is active
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::ParseFailure(_) | Self::DivisionByZero | Self::Overflow => ERROR_MARKER,
            Self::NegativeSquareRoot => INVALID_INPUT_MARKER,
            Self::NonIntegerForBinary => NOT_INTEGER_MARKER,
        }
    }

    /// Returns true if the text is one of the error markers
    #[must_use]
    pub fn is_marker(text: &str) -> bool {
        matches!(
            text,
            ERROR_MARKER | INVALID_INPUT_MARKER | NOT_INTEGER_MARKER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError display tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_parse_failure() {
        let err = CalcError::ParseFailure("-".into());
        assert_eq!(err.to_string(), "Cannot read display as a number: \"-\"");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert!(CalcError::Overflow.to_string().contains("finite"));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::NegativeSquareRoot);
        assert!(err.to_string().contains("negative"));
    }

    // ===== Marker tests =====

    #[test]
    fn test_generic_failures_share_marker() {
        assert_eq!(CalcError::ParseFailure(String::new()).marker(), "Error");
        assert_eq!(CalcError::DivisionByZero.marker(), "Error");
        assert_eq!(CalcError::Overflow.marker(), "Error");
    }

    #[test]
    fn test_distinct_markers() {
        assert_eq!(CalcError::NegativeSquareRoot.marker(), "Invalid input");
        assert_eq!(CalcError::NonIntegerForBinary.marker(), "Not integer");
        assert_ne!(
            CalcError::NegativeSquareRoot.marker(),
            CalcError::DivisionByZero.marker()
        );
    }

    #[test]
    fn test_is_marker() {
        assert!(CalcError::is_marker("Error"));
        assert!(CalcError::is_marker("Invalid input"));
        assert!(CalcError::is_marker("Not integer"));
        assert!(!CalcError::is_marker("0"));
        assert!(!CalcError::is_marker("error"));
    }

    #[test]
    fn test_calc_error_serializes() {
        let json = serde_json::to_string(&CalcError::DivisionByZero).unwrap();
        assert_eq!(json, "\"DivisionByZero\"");
    }
}

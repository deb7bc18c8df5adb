//! Input tokens - one per calculator button

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operator;

/// A decimal digit, guaranteed to be in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All ten digits, indexed by value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, or `None` if `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from its ASCII character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Every input the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Type a digit
    Digit(Digit),
    /// Type the decimal point
    Dot,
    /// Binary operator
    Operator(Operator),
    /// Complete the pending operation, or repeat the last one
    Equals,
    /// Full reset - the only way out of an error
    Clear,
    /// Remove the last typed character
    Backspace,
    /// Square root of the display
    Sqrt,
    /// Square of the display
    Square,
    /// Show the display as binary digits
    ToBinary,
}

impl Token {
    /// Creates a digit token, or `None` if `value > 9`
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// Returns the keypad label for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.as_char().to_string(),
            Self::Dot => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "←".to_string(),
            Self::Sqrt => "√".to_string(),
            Self::Square => "x²".to_string(),
            Self::ToBinary => "BIN".to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A label that names no calculator button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown button: {label:?}")]
pub struct ParseTokenError {
    label: String,
}

impl ParseTokenError {
    /// Creates an error for the given label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The label that failed to parse
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FromStr for Token {
    type Err = ParseTokenError;

    /// Parses a keypad label (`7`, `+`, `√`, `x²`, `BIN`, `←`, `C`, ...) or an
    /// ASCII alias (`sqrt`, `sq`, `bin`, `back`, `clear`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Digit::from_char(c) {
                return Ok(Self::Digit(d));
            }
            if let Some(op) = Operator::from_symbol(c) {
                return Ok(Self::Operator(op));
            }
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "." | "," => Ok(Self::Dot),
            "×" => Ok(Self::Operator(Operator::Multiply)),
            "÷" => Ok(Self::Operator(Operator::Divide)),
            "=" => Ok(Self::Equals),
            "c" | "clear" => Ok(Self::Clear),
            "←" | "<" | "bs" | "back" | "backspace" => Ok(Self::Backspace),
            "√" | "sqrt" => Ok(Self::Sqrt),
            "x²" | "x^2" | "sq" | "square" => Ok(Self::Square),
            "bin" | "binary" => Ok(Self::ToBinary),
            _ => Err(ParseTokenError::new(trimmed)),
        }
    }
}

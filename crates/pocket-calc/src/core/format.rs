//! Display text <-> number conversions

use crate::core::{CalcError, CalcResult};

/// Maximum number of fractional digits shown for a result
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Formats a result for the display.
///
/// Uses the shortest text that reads back as the same value, rounded to at
/// most [`MAX_FRACTION_DIGITS`] fractional digits with trailing zeros and a
/// trailing decimal point dropped. Never uses exponent notation and renders
/// negative zero as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let shortest = value.to_string();
    let mut text = match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > MAX_FRACTION_DIGITS => {
            let rounded = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
            rounded
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
        _ => shortest,
    };
    if text == "-0" {
        text = String::from("0");
    }
    text
}

/// Reads the display as a finite number
pub fn parse_display(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::ParseFailure(text.to_string())),
    }
}

/// Renders an integral value as signed binary digits (`-5` -> `-101`)
pub fn to_binary(value: f64) -> CalcResult<String> {
    if value != value.floor() {
        return Err(CalcError::NonIntegerForBinary);
    }
    let integer = value as i64;
    let digits = format!("{:b}", integer.unsigned_abs());
    if integer < 0 {
        Ok(format!("-{digits}"))
    } else {
        Ok(digits)
    }
}

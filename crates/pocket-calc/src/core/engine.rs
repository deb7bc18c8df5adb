//! Calculator engine state machine
//!
//! Evaluation is strictly left to right: pressing an operator while another
//! is pending applies the pending one first, so `3 + 4 * 2 =` shows `14`.
//!
//! Error handling is uniform. Every fallible step returns a [`CalcResult`];
//! [`CalculatorState::handle_input`] converts a failure into an error display
//! and, while that error is shown, ignores every token except [`Token::Clear`].

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::format::{format_number, parse_display, to_binary};
use super::operations::check_finite;
use crate::core::{CalcError, CalcResult, Digit, Operator, Token};

/// Display text of a freshly cleared calculator
const ZERO: &str = "0";

/// Complete engine state, mutated in place by each input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Text currently shown
    display: String,
    /// Left operand of the pending operation
    accumulator: f64,
    /// Operator awaiting its right operand
    pending_operator: Option<Operator>,
    /// Next digit or dot starts a fresh literal
    entering_new_number: bool,
    /// Active error; only `Clear` removes it
    error: Option<CalcError>,
    /// Operator of the last completed `=`
    last_operator: Option<Operator>,
    /// Right operand of the last completed `=`
    last_operand: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates a cleared calculator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: ZERO.to_string(),
            accumulator: 0.0,
            pending_operator: None,
            entering_new_number: true,
            error: None,
            last_operator: None,
            last_operand: 0.0,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the accumulator
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns the operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true if the next digit starts a new literal
    #[must_use]
    pub fn is_entering_new_number(&self) -> bool {
        self.entering_new_number
    }

    /// Returns the active error, if any
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Returns true while an error is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the operator repeated by a bare `=`
    #[must_use]
    pub fn last_operator(&self) -> Option<Operator> {
        self.last_operator
    }

    /// Returns the operand repeated by a bare `=`
    #[must_use]
    pub fn last_operand(&self) -> f64 {
        self.last_operand
    }

    /// Handles one button press and returns the new display text
    pub fn handle_input(&mut self, token: Token) -> &str {
        if self.error.is_some() && token != Token::Clear {
            trace!(%token, "ignored while in error state");
            return &self.display;
        }

        let outcome = match token {
            Token::Operator(Operator::Subtract)
                if self.entering_new_number && self.display == ZERO =>
            {
                self.start_negative();
                Ok(())
            }
            Token::Digit(digit) => {
                self.push_digit(digit);
                Ok(())
            }
            Token::Dot => {
                self.push_dot();
                Ok(())
            }
            Token::Backspace => {
                self.backspace();
                Ok(())
            }
            Token::Clear => {
                self.clear();
                Ok(())
            }
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::Sqrt => self.press_sqrt(),
            Token::Square => self.press_square(),
            Token::ToBinary => self.press_binary(),
        };

        if let Err(err) = outcome {
            self.enter_error(err);
        }
        trace!(%token, display = %self.display, "handled input");
        &self.display
    }

    /// Handles a sequence of presses and returns the final display text
    pub fn handle_all<I>(&mut self, tokens: I) -> &str
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.handle_input(token);
        }
        &self.display
    }

    /// Full reset
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ===== Literal entry =====

    fn start_negative(&mut self) {
        self.display = String::from("-");
        self.entering_new_number = false;
    }

    fn push_digit(&mut self, digit: Digit) {
        if self.entering_new_number || self.display == ZERO {
            self.display = digit.as_char().to_string();
            self.entering_new_number = false;
        } else {
            self.display.push(digit.as_char());
        }
    }

    fn push_dot(&mut self) {
        if self.entering_new_number {
            self.display = String::from("0.");
            self.entering_new_number = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.entering_new_number {
            return;
        }
        if self.display.chars().count() <= 1 {
            self.display = ZERO.to_string();
            self.entering_new_number = true;
        } else {
            self.display.pop();
        }
    }

    // ===== Binary operations =====

    fn press_operator(&mut self, op: Operator) -> CalcResult<()> {
        let value = parse_display(&self.display)?;
        match self.pending_operator {
            None => self.accumulator = value,
            Some(pending) => {
                let result = pending.apply(self.accumulator, value)?;
                debug!(lhs = self.accumulator, %pending, rhs = value, result, "chained operation");
                self.accumulator = result;
                self.show(result);
            }
        }
        self.pending_operator = Some(op);
        self.entering_new_number = true;
        Ok(())
    }

    fn press_equals(&mut self) -> CalcResult<()> {
        let value = parse_display(&self.display)?;
        if let Some(pending) = self.pending_operator {
            let result = pending.apply(self.accumulator, value)?;
            debug!(lhs = self.accumulator, %pending, rhs = value, result, "equals");
            self.last_operator = Some(pending);
            self.last_operand = value;
            self.accumulator = result;
            self.show(result);
            self.pending_operator = None;
            self.entering_new_number = true;
        } else if let Some(last) = self.last_operator {
            // The base operand is re-read from the display on every repeat.
            let result = last.apply(value, self.last_operand)?;
            debug!(lhs = value, %last, rhs = self.last_operand, result, "repeat equals");
            self.accumulator = result;
            self.show(result);
            self.entering_new_number = true;
        }
        Ok(())
    }

    // ===== Unary operations =====

    fn press_sqrt(&mut self) -> CalcResult<()> {
        let value = parse_display(&self.display)?;
        if value < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        self.show(value.sqrt());
        self.entering_new_number = true;
        Ok(())
    }

    fn press_square(&mut self) -> CalcResult<()> {
        let value = parse_display(&self.display)?;
        let result = check_finite(value * value)?;
        self.show(result);
        self.entering_new_number = true;
        Ok(())
    }

    fn press_binary(&mut self) -> CalcResult<()> {
        let value = parse_display(&self.display)?;
        self.display = to_binary(value)?;
        self.entering_new_number = true;
        Ok(())
    }

    // ===== Display =====

    fn show(&mut self, value: f64) {
        self.display = format_number(value);
    }

    fn enter_error(&mut self, err: CalcError) {
        warn!(error = %err, marker = err.marker(), "calculator entered error state");
        self.display = err.marker().to_string();
        self.pending_operator = None;
        self.error = Some(err);
    }
}

//! Pocket Calculator - button-driven calculator engine
//!
//! A deterministic state machine that turns discrete button presses into
//! arithmetic. Operators chain strictly left to right, a bare `=` repeats the
//! last operation, and errors latch until the calculator is cleared.
//!
//! # Behaviour
//!
//! - **Chaining**: `2 + 3 * 4 =` shows `20`, not `14`
//! - **Repeat-equals**: `5 + 3 = =` shows `8`, then `11`
//! - **Leading minus**: `-` on a fresh `0` starts a negative literal
//! - **Error markers**: `Error`, `Invalid input` and `Not integer`, cleared only by `C`
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = CalculatorState::new();
//! for label in ["5", "+", "3", "="] {
//!     calc.handle_input(label.parse().unwrap());
//! }
//! assert_eq!(calc.display(), "8");
//!
//! // A bare equals repeats "+ 3"
//! assert_eq!(calc.handle_input(Token::Equals), "11");
//!
//! // Errors latch until clear
//! calc.handle_input(Token::Operator(Operator::Divide));
//! calc.handle_input(Token::digit(0).unwrap());
//! assert_eq!(calc.handle_input(Token::Equals), "Error");
//! assert_eq!(calc.handle_input(Token::digit(4).unwrap()), "Error");
//! assert_eq!(calc.handle_input(Token::Clear), "0");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Keyboard mapping for terminal front ends
#[cfg(feature = "tui")]
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_number, parse_display, to_binary};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorState, Digit, Operator, ParseTokenError, Token,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver, KeypadDriver};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::input::{InputHandler, KeyAction};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn run(labels: &str) -> String {
        let mut calc = CalculatorState::new();
        for label in labels.split_whitespace() {
            calc.handle_input(label.parse().unwrap());
        }
        calc.display().to_string()
    }

    #[test]
    fn test_prelude_imports() {
        let mut driver = EngineDriver::new();
        assert_eq!(driver.press_all("6 * 7 =").unwrap(), "42");
    }

    #[test]
    fn test_left_to_right_chaining() {
        assert_eq!(run("2 + 3 * 4 ="), "20");
    }

    #[test]
    fn test_repeat_equals() {
        assert_eq!(run("5 + 3 ="), "8");
        assert_eq!(run("5 + 3 = ="), "11");
    }

    #[test]
    fn test_error_markers_distinct() {
        assert_eq!(run("7 / 0 ="), "Error");
        assert_eq!(run("- 4 √"), "Invalid input");
        assert_eq!(run("2 . 5 BIN"), "Not integer");
    }

    #[test]
    fn test_binary_rendering() {
        assert_eq!(run("1 0 BIN"), "1010");
        assert_eq!(run("- 5 BIN"), "-101");
    }

    #[test]
    fn test_leading_minus() {
        assert_eq!(run("- 5 ="), "-5");
    }

    #[test]
    fn test_formatter_exports() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(parse_display("2.5").unwrap(), 2.5);
        assert_eq!(to_binary(10.0).unwrap(), "1010");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_keyboard_drives_engine() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let handler = InputHandler::new();
        let mut calc = CalculatorState::new();
        for code in [
            KeyCode::Char('9'),
            KeyCode::Char('r'),
            KeyCode::Char('s'),
            KeyCode::Enter,
        ] {
            if let KeyAction::Press(token) = handler.handle_key(KeyEvent::new(code, KeyModifiers::NONE)) {
                calc.handle_input(token);
            }
        }
        assert_eq!(calc.display(), "9");
    }
}

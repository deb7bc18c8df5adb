//! Unified calculator driver
//!
//! A presentation layer talks to the engine by pressing labelled buttons and
//! reading the display back. [`CalculatorDriver`] captures that contract so
//! the same behavioural checks run against a bare engine or a keypad.
//!
//! ```rust
//! use pocket_calc::driver::{verify_chaining, EngineDriver, KeypadDriver};
//!
//! verify_chaining(&mut EngineDriver::new()).unwrap();
//! verify_chaining(&mut KeypadDriver::new()).unwrap();
//! ```

use crate::core::{CalculatorState, ParseTokenError, Token};
use crate::keypad::Keypad;

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> Result<(), ParseTokenError>;

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns true while the calculator shows an error
    fn is_error(&self) -> bool;

    /// Resets the calculator
    fn clear(&mut self);

    /// Presses whitespace-separated labels in order and returns the display
    fn press_all(&mut self, labels: &str) -> Result<String, ParseTokenError> {
        for label in labels.split_whitespace() {
            self.press(label)?;
        }
        Ok(self.display())
    }
}

/// Driver feeding parsed tokens straight into a [`CalculatorState`]
#[derive(Debug, Default)]
pub struct EngineDriver {
    state: CalculatorState,
}

impl EngineDriver {
    /// Creates a driver over a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, label: &str) -> Result<(), ParseTokenError> {
        let token: Token = label.parse()?;
        self.state.handle_input(token);
        Ok(())
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn is_error(&self) -> bool {
        self.state.is_error()
    }

    fn clear(&mut self) {
        self.state.handle_input(Token::Clear);
    }
}

/// Driver that clicks buttons on a [`Keypad`], the way a UI would
#[derive(Debug, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    state: CalculatorState,
    clicks: usize,
}

impl KeypadDriver {
    /// Creates a driver with the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keypad, with the last clicked button highlighted
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the number of buttons clicked so far
    #[must_use]
    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// Clicks the button with the given element id
    pub fn click_id(&mut self, id: &str) -> Result<(), ParseTokenError> {
        let token = self
            .keypad
            .find_button_by_id(id)
            .map(|b| b.token)
            .ok_or_else(|| ParseTokenError::new(id))?;
        self.click(token);
        Ok(())
    }

    fn click(&mut self, token: Token) {
        self.keypad.highlight(token);
        self.clicks += 1;
        self.state.handle_input(token);
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, label: &str) -> Result<(), ParseTokenError> {
        let token = self
            .keypad
            .find_button_by_label(label)
            .and_then(|index| self.keypad.get_button(index))
            .map(|b| b.token)
            .ok_or_else(|| ParseTokenError::new(label))?;
        self.click(token);
        Ok(())
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn is_error(&self) -> bool {
        self.state.is_error()
    }

    fn clear(&mut self) {
        // Clicking C is always possible, even in an error state.
        if self.press("C").is_err() {
            self.state.clear();
        }
    }
}

// ===== Unified behaviour checks =====
// These run against ANY CalculatorDriver implementation.

/// Verifies digit entry, leading-zero suppression and dot idempotence
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) -> Result<(), ParseTokenError> {
    assert_eq!(driver.press_all("1 2 3")?, "123");
    driver.clear();

    assert_eq!(driver.press_all("0 0 0")?, "0");
    driver.clear();

    assert_eq!(driver.press_all("3 . . 1 .")?, "3.1");
    driver.clear();

    assert_eq!(driver.press_all("4 2 ←")?, "4");
    assert_eq!(driver.press_all("←")?, "0");
    driver.clear();
    Ok(())
}

/// Verifies strict left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> Result<(), ParseTokenError> {
    assert_eq!(driver.press_all("2 + 3 * 4 =")?, "20");
    driver.clear();

    assert_eq!(driver.press_all("1 0 0 / 4 - 5 =")?, "20");
    driver.clear();
    Ok(())
}

/// Verifies that a bare `=` repeats the last operation
pub fn verify_repeat_equals<D: CalculatorDriver>(driver: &mut D) -> Result<(), ParseTokenError> {
    assert_eq!(driver.press_all("5 + 3 =")?, "8");
    assert_eq!(driver.press_all("=")?, "11");
    assert_eq!(driver.press_all("=")?, "14");
    driver.clear();
    Ok(())
}

/// Verifies the error markers and that only clear recovers
pub fn verify_errors<D: CalculatorDriver>(driver: &mut D) -> Result<(), ParseTokenError> {
    assert_eq!(driver.press_all("7 / 0 =")?, "Error");
    assert!(driver.is_error());
    assert_eq!(driver.press_all("5 + 1 =")?, "Error");
    driver.clear();
    assert!(!driver.is_error());

    assert_eq!(driver.press_all("- 4 √")?, "Invalid input");
    driver.clear();

    assert_eq!(driver.press_all("2 . 5 BIN")?, "Not integer");
    driver.clear();
    Ok(())
}

/// Verifies the unary operations
pub fn verify_unary<D: CalculatorDriver>(driver: &mut D) -> Result<(), ParseTokenError> {
    assert_eq!(driver.press_all("8 1 √")?, "9");
    assert_eq!(driver.press_all("x²")?, "81");
    driver.clear();

    assert_eq!(driver.press_all("1 0 BIN")?, "1010");
    driver.clear();

    assert_eq!(driver.press_all("- 5 BIN")?, "-101");
    driver.clear();
    Ok(())
}

/// Runs every behaviour check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) -> Result<(), ParseTokenError> {
    verify_entry(driver)?;
    verify_chaining(driver)?;
    verify_repeat_equals(driver)?;
    verify_errors(driver)?;
    verify_unary(driver)
}

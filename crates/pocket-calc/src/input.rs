//! Keyboard input handling
//!
//! Maps terminal key events onto calculator tokens so a keyboard can stand in
//! for the keypad.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Digit, Operator, Token};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(Token),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(Token::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Press(Token::Equals),
            KeyCode::Backspace => KeyAction::Press(Token::Backspace),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Token::Clear),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        if let Some(digit) = Digit::from_char(c) {
            return KeyAction::Press(Token::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return KeyAction::Press(Token::Operator(op));
        }
        match c {
            '.' | ',' => KeyAction::Press(Token::Dot),
            '=' => KeyAction::Press(Token::Equals),
            'c' | 'C' => KeyAction::Press(Token::Clear),
            'r' => KeyAction::Press(Token::Sqrt),
            's' => KeyAction::Press(Token::Square),
            'b' => KeyAction::Press(Token::ToBinary),
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

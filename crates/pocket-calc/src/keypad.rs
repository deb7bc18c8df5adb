//! Keypad layout
//!
//! The layout the presentation layer draws and clicks:
//!
//! ```text
//! [ √ ] [x² ] [BIN] [ C ]
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ . ] [ 0 ] [ ← ] [ + ]
//! [          =          ]
//! ```
//!
//! The equals button spans the whole bottom row.

use crate::core::{Digit, Operator, Token};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The token this button sends
    pub token: Token,
    /// The DOM-style element id (`btn-7`, `btn-plus`, ...)
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-cell button at (row, col)
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            id: button_id(token),
            token,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Makes the button cover `span` columns
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Returns the element id for a token's button
fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{}", d.value()),
        Token::Dot => "btn-decimal".to_string(),
        Token::Operator(op) => format!("btn-{}", op.name()),
        Token::Equals => "btn-equals".to_string(),
        Token::Clear => "btn-clear".to_string(),
        Token::Backspace => "btn-backspace".to_string(),
        Token::Sqrt => "btn-sqrt".to_string(),
        Token::Square => "btn-square".to_string(),
        Token::ToBinary => "btn-binary".to_string(),
    }
}

/// The calculator keypad - a 5x4 grid plus a full-width equals row
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: usize| Token::Digit(Digit::ALL[d]);
        let grid = [
            [Token::Sqrt, Token::Square, Token::ToBinary, Token::Clear],
            [
                digit(7),
                digit(8),
                digit(9),
                Token::Operator(Operator::Divide),
            ],
            [
                digit(4),
                digit(5),
                digit(6),
                Token::Operator(Operator::Multiply),
            ],
            [
                digit(1),
                digit(2),
                digit(3),
                Token::Operator(Operator::Subtract),
            ],
            [
                Token::Dot,
                digit(0),
                Token::Backspace,
                Token::Operator(Operator::Add),
            ],
        ];
        let cols = 4;

        let mut buttons: Vec<KeypadButton> = grid
            .iter()
            .enumerate()
            .flat_map(|(row, tokens)| {
                tokens
                    .iter()
                    .enumerate()
                    .map(move |(col, &token)| KeypadButton::new(token, row, col))
            })
            .collect();
        buttons.push(KeypadButton::new(Token::Equals, grid.len(), 0).with_span(cols));

        Self {
            buttons,
            cols,
            rows: grid.len() + 1,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering a cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button index by its label (or any label alias)
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        let token: Token = label.parse().ok()?;
        self.find_button_by_token(token)
    }

    /// Finds a button index by the token it sends
    #[must_use]
    pub fn find_button_by_token(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Finds a button by its element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Highlights a button by index and returns its token
    pub fn press_button(&mut self, index: usize) -> Option<Token> {
        let button = self.buttons.get_mut(index)?;
        button.pressed = true;
        Some(button.token)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// Highlights only the button for `token`
    pub fn highlight(&mut self, token: Token) {
        self.release_all();
        if let Some(index) = self.find_button_by_token(token) {
            self.press_button(index);
        }
    }

    /// Returns the currently highlighted buttons
    pub fn pressed(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Renders the layout as text, one line per row
    #[must_use]
    pub fn render(&self) -> String {
        const CELL: usize = 5;
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| {
                        let inner = b.span * (CELL + 1) - 3;
                        format!("[{:^inner$}]", b.label())
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Command handlers
//!
//! Every handler writes display lines to a caller-supplied writer so the same
//! code serves the binary and the unit tests.

use std::io::{BufRead, Write};

use console::Style;
use pocket_calc::core::{CalculatorState, Token};
use pocket_calc::keypad::Keypad;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Words that end a REPL session
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Formats display lines according to the configuration
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
    show_state: bool,
}

impl Printer {
    /// Creates a printer for the given configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            color: config.color.should_color(),
            show_state: config.show_state,
        }
    }

    /// Renders the display, red when it shows an error marker
    #[must_use]
    pub fn display_line(&self, state: &CalculatorState) -> String {
        let text = state.display();
        let mut line = if self.color && state.is_error() {
            Style::new()
                .red()
                .bold()
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text.to_string()
        };
        if self.show_state {
            if let Ok(json) = serde_json::to_string(state) {
                line.push_str("  ");
                line.push_str(&json);
            }
        }
        line
    }
}

/// Parses every label before anything is pressed
pub fn parse_labels<S: AsRef<str>>(labels: &[S]) -> CliResult<Vec<Token>> {
    labels
        .iter()
        .map(|label| label.as_ref().parse::<Token>().map_err(CliError::from))
        .collect()
}

/// `press`: feeds labels in order and prints the display
pub fn run_press<S, W>(config: &CliConfig, labels: &[S], each: bool, out: &mut W) -> CliResult<()>
where
    S: AsRef<str>,
    W: Write,
{
    let tokens = parse_labels(labels)?;
    let printer = Printer::new(config);
    let mut state = CalculatorState::new();
    info!(presses = tokens.len(), "pressing buttons");

    for token in tokens {
        state.handle_input(token);
        if each {
            writeln!(out, "{token}\t{}", printer.display_line(&state))?;
        }
    }
    if !each {
        writeln!(out, "{}", printer.display_line(&state))?;
    }
    Ok(())
}

/// `repl`: one display line per input line until EOF or a quit word
pub fn run_repl<R, W>(config: &CliConfig, input: R, out: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    let printer = Printer::new(config);
    let mut state = CalculatorState::new();
    info!("repl session started");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&line.to_ascii_lowercase().as_str()) {
            break;
        }

        for word in line.split_whitespace() {
            match word.parse::<Token>() {
                Ok(token) => {
                    state.handle_input(token);
                }
                Err(err) => {
                    // The rest of the line is dropped; the session goes on.
                    debug!(label = word, "unknown button");
                    writeln!(out, "{err}")?;
                    break;
                }
            }
        }
        writeln!(out, "{}", printer.display_line(&state))?;
        out.flush()?;
    }

    info!("repl session ended");
    Ok(())
}

/// `keypad`: prints the layout, and the button ids when asked
pub fn run_keypad<W: Write>(ids: bool, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    writeln!(out, "{}", keypad.render())?;
    if ids {
        writeln!(out)?;
        for button in keypad.buttons() {
            writeln!(
                out,
                "{:<14} {:<4} row {} col {}",
                button.id,
                button.label(),
                button.row,
                button.col
            )?;
        }
    }
    Ok(())
}

/// `config`: prints the effective configuration as JSON
pub fn run_config<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", config.to_json()?)?;
    Ok(())
}

/// `keys`: raw-mode keyboard session
#[cfg(feature = "tui")]
pub fn run_keys(config: &CliConfig) -> CliResult<()> {
    use crossterm::event::{self, Event, KeyEventKind};
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
    use pocket_calc::input::{InputHandler, KeyAction};

    /// Restores cooked mode however the session ends
    struct RawModeGuard;

    impl Drop for RawModeGuard {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
        }
    }

    let printer = Printer::new(config);
    let handler = InputHandler::new();
    let mut state = CalculatorState::new();
    let mut stdout = std::io::stdout();

    enable_raw_mode()?;
    let _guard = RawModeGuard;
    info!("keyboard session started");
    redraw(&mut stdout, &printer.display_line(&state))?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match handler.handle_key(key) {
            KeyAction::Press(token) => {
                state.handle_input(token);
                redraw(&mut stdout, &printer.display_line(&state))?;
            }
            KeyAction::Quit => break,
            KeyAction::None => {}
        }
    }

    crossterm::execute!(stdout, crossterm::style::Print("\r\n"))?;
    info!("keyboard session ended");
    Ok(())
}

/// Overwrites the current terminal line
#[cfg(feature = "tui")]
fn redraw<W: Write>(out: &mut W, line: &str) -> CliResult<()> {
    use crossterm::{cursor, style::Print, terminal};

    crossterm::execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine),
        Print(line)
    )?;
    Ok(())
}

//! pocket-calc CLI library
//!
//! Command-line front end for the [`pocket_calc`] engine. The binary is a thin
//! presentation layer: it turns button labels or keystrokes into tokens,
//! forwards them to the engine and prints the display text.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, KeypadArgs, LogFormatArg, PressArgs};
pub use config::{CliConfig, ColorChoice, LogFormat, Verbosity};
pub use error::{CliError, CliResult};

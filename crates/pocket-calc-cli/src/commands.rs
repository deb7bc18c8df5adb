//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// pocket-calc: a button-driven pocket calculator
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Log output format on stderr
    #[arg(long, default_value = "text", global = true, env = "POCKET_CALC_LOG_FORMAT")]
    pub log_format: LogFormatArg,

    /// Print the full engine state after each input
    #[arg(long, global = true)]
    pub show_state: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons in order and print the display
    Press(PressArgs),

    /// Read button labels from stdin, one display line per input line
    Repl,

    /// Drive the calculator from the keyboard
    #[cfg(feature = "tui")]
    Keys,

    /// Print the keypad layout
    Keypad(KeypadArgs),

    /// Show configuration
    Config,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels, e.g. `5 + 3 =` or `9 sqrt`
    #[arg(required = true, allow_hyphen_values = true)]
    pub labels: Vec<String>,

    /// Print the display after every press
    #[arg(short, long)]
    pub each: bool,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Also list every button id
    #[arg(long)]
    pub ids: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for crate::config::LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, LogFormat};

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_press_command() {
            let cli = Cli::parse_from(["pocket-calc", "press", "5", "+", "3", "="]);
            match cli.command {
                Commands::Press(args) => {
                    assert_eq!(args.labels, ["5", "+", "3", "="]);
                    assert!(!args.each);
                }
                _ => panic!("expected press command"),
            }
        }

        #[test]
        fn test_press_accepts_minus_label() {
            let cli = Cli::parse_from(["pocket-calc", "press", "-", "5", "="]);
            match cli.command {
                Commands::Press(args) => assert_eq!(args.labels, ["-", "5", "="]),
                _ => panic!("expected press command"),
            }
        }

        #[test]
        fn test_press_each_flag() {
            let cli = Cli::parse_from(["pocket-calc", "press", "--each", "1"]);
            match cli.command {
                Commands::Press(args) => assert!(args.each),
                _ => panic!("expected press command"),
            }
        }

        #[test]
        fn test_press_requires_labels() {
            assert!(Cli::try_parse_from(["pocket-calc", "press"]).is_err());
        }

        #[test]
        fn test_parse_repl_command() {
            let cli = Cli::parse_from(["pocket-calc", "repl"]);
            assert!(matches!(cli.command, Commands::Repl));
        }

        #[test]
        fn test_parse_keypad_command() {
            let cli = Cli::parse_from(["pocket-calc", "keypad", "--ids"]);
            match cli.command {
                Commands::Keypad(args) => assert!(args.ids),
                _ => panic!("expected keypad command"),
            }
        }

        #[test]
        fn test_parse_config_command() {
            let cli = Cli::parse_from(["pocket-calc", "config"]);
            assert!(matches!(cli.command, Commands::Config));
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from([
                "pocket-calc",
                "-vv",
                "--color",
                "never",
                "--log-format",
                "json",
                "--show-state",
                "repl",
            ]);
            assert_eq!(cli.verbose, 2);
            assert!(matches!(cli.color, ColorArg::Never));
            assert!(matches!(cli.log_format, LogFormatArg::Json));
            assert!(cli.show_state);
        }

        #[test]
        fn test_global_flags_after_subcommand() {
            let cli = Cli::parse_from(["pocket-calc", "config", "-q"]);
            assert!(cli.quiet);
        }
    }

    mod arg_conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_log_format_arg_conversion() {
            assert_eq!(LogFormat::from(LogFormatArg::Text), LogFormat::Text);
            assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
        }
    }
}

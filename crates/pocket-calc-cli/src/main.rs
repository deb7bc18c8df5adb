//! pocket-calc: button-driven pocket calculator
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc press 5 + 3 = =         # prints 11
//! pocket-calc press --each 9 sqrt     # display after every press
//! echo "2 + 3 * 4 =" | pocket-calc repl
//! pocket-calc keys                    # keyboard session
//! pocket-calc keypad                  # layout
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocket_calc_cli::{logging, session, Cli, CliConfig, CliResult, Commands, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init(&config);
    tracing::debug!(?config, "configuration");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Press(args) => session::run_press(&config, &args.labels, args.each, &mut stdout),
        Commands::Repl => session::run_repl(&config, io::stdin().lock(), &mut stdout),
        #[cfg(feature = "tui")]
        Commands::Keys => {
            drop(stdout);
            session::run_keys(&config)
        }
        Commands::Keypad(args) => session::run_keypad(args.ids, &mut stdout),
        Commands::Config => session::run_config(&config, &mut stdout),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_format(cli.log_format.into())
        .with_show_state(cli.show_state)
}

//! Tracing subscriber setup
//!
//! Log lines go to stderr so stdout carries only display text. `RUST_LOG`
//! overrides the level chosen by `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogFormat};

/// Builds the filter: `RUST_LOG` if set, otherwise the verbosity level
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_level()))
}

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed.
pub fn init(config: &CliConfig) -> bool {
    let filter = env_filter(config);
    let result = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .flatten_event(true)
            .with_target(true)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(config.color.should_color())
            .with_target(false)
            .try_init(),
    };
    result.is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    #[test]
    fn test_second_init_is_refused() {
        let config = CliConfig::new().with_verbosity(Verbosity::Quiet);
        init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn test_filter_builds_for_every_level() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
            Verbosity::Trace,
        ] {
            let config = CliConfig::new().with_verbosity(verbosity);
            let filter = env_filter(&config).to_string();
            assert!(!filter.is_empty());
        }
    }
}

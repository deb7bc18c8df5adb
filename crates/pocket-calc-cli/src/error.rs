//! Error types for the CLI

use pocket_calc::core::ParseTokenError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A label that names no calculator button
    #[error(transparent)]
    UnknownButton(#[from] ParseTokenError),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_unknown_button_from() {
        let err: CliError = ParseTokenError::new("pi").into();
        assert!(matches!(err, CliError::UnknownButton(_)));
        assert_eq!(err.to_string(), "Unknown button: \"pi\"");
    }

    #[test]
    fn test_json_error_is_config() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: CliError = json_err.into();
        assert!(matches!(err, CliError::Config { .. }));
    }
}

//! Error types for SafeIMEI configuration and start-up

use std::{error::Error as StdError, fmt};

/// Main error type for the SafeIMEI binaries
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Logging could not be initialized
    Logging {
        /// Error message
        message: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Logging { message } => write!(f, "Logging error: {message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let app_error = Error::from(io::Error::new(io::ErrorKind::AddrInUse, "port taken"));

        assert!(matches!(app_error, Error::Io(_)));
        assert_eq!(app_error.to_string(), "I/O error: port taken");
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "missing field".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration error: missing field");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_config_error_conversion() {
        let error = Error::from(config::ConfigError::Message("bad port".to_string()));
        assert_eq!(error.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_logging_display() {
        let logging = Error::Logging {
            message: "already set".to_string(),
        };
        assert_eq!(logging.to_string(), "Logging error: already set");
    }

    #[test]
    fn test_result_alias_usage() {
        fn parse_port(raw: &str) -> Result<u16> {
            raw.parse().map_err(|_| Error::Configuration {
                message: format!("invalid port {raw}"),
            })
        }

        assert_eq!(parse_port("8080").ok(), Some(8080));
        assert!(parse_port("eighty").is_err());
    }
}

//! Configuration, error type and logging setup shared by the SafeIMEI binaries

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;

pub use config::{Config, LoggingConfig, RegistryConfig, ServerConfig};
pub use error::{Error, Result};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level. The format is
/// JSON unless `logging.format` is `"text"`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level).map_err(|e| Error::Logging {
            message: e.to_string(),
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| Error::Logging {
        message: e.to_string(),
    })?;

    tracing::debug!(level = %logging.level, format = %logging.format, "logging initialized");
    Ok(())
}


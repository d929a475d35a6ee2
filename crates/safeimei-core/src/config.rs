//! Configuration management for SafeIMEI

use serde::{Deserialize, Serialize};
use std::{path::Path, path::PathBuf, time::Duration};

/// Environment variable prefix, e.g. `SAFEIMEI_SERVER__PORT`
pub const ENV_PREFIX: &str = "SAFEIMEI";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Static host configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulated registry latency
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front end (`index.html` and assets)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// `host:port` for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Delays applied by the in-memory registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// IMEI lookup delay in milliseconds
    #[serde(default = "default_lookup_delay_ms")]
    pub lookup_delay_ms: u64,

    /// Login and code verification delay in milliseconds
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,

    /// Report filing delay in milliseconds
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl RegistryConfig {
    /// IMEI lookup delay
    pub const fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    /// Login and code verification delay
    pub const fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// Report filing delay
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        !self.format.eq_ignore_ascii_case("text")
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

const fn default_lookup_delay_ms() -> u64 {
    1500
}

const fn default_auth_delay_ms() -> u64 {
    300
}

const fn default_submit_delay_ms() -> u64 {
    800
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            lookup_delay_ms: default_lookup_delay_ms(),
            auth_delay_ms: default_auth_delay_ms(),
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `safeimei.{toml,yaml,json}` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or the default name) and
    /// the environment; environment variables win
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("safeimei").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unreadable_literal)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, PathBuf::from("dist"));
        assert_eq!(config.registry.lookup_delay_ms, 1500);
        assert_eq!(config.registry.auth_delay_ms, 300);
        assert_eq!(config.registry.submit_delay_ms, 800);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_bind_address() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
        };
        assert_eq!(server.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_registry_durations() {
        let registry = RegistryConfig {
            lookup_delay_ms: 0,
            auth_delay_ms: 25,
            submit_delay_ms: 1000,
        };
        assert_eq!(registry.lookup_delay(), Duration::ZERO);
        assert_eq!(registry.auth_delay(), Duration::from_millis(25));
        assert_eq!(registry.submit_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_logging_format() {
        let mut logging = LoggingConfig::default();
        assert!(logging.is_json());
        logging.format = "TEXT".to_string();
        assert!(!logging.is_json());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json = r#"{ "server": { "port": 9000 }, "registry": { "lookup_delay_ms": 10 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.registry.lookup_delay_ms, 10);
        assert_eq!(config.registry.submit_delay_ms, 800);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9100\nstatic_dir = \"site\"\n\n[logging]\nformat = \"text\""
        )
        .unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.static_dir, PathBuf::from("site"));
        assert!(!config.logging.is_json());
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = Config::load_from(Some(&missing)).unwrap_err();
        assert!(matches!(err, crate::Error::Configuration { .. }));
    }

    #[test]
    fn test_load_from_bad_value_fails() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();

        assert!(Config::load_from(Some(file.path())).is_err());
    }
}

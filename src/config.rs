//! Configuration loading and constants.
//!
//! Configuration is resolved in layers: built-in defaults, an optional TOML
//! file, environment variables, and finally command line flags
//! (`ConfigOverrides`). `AppConfig` is the root configuration struct
//! containing all settings.

use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

// =============================================================================
// Response Constants
// =============================================================================

/// Welcome message returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to Flask CI/CD Demo";

/// Status label returned by `GET /`
pub const WELCOME_STATUS: &str = "success";

/// Service version reported by `GET /`
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status label returned by `GET /status`
pub const STATUS_HEALTHY: &str = "healthy";

/// Service name returned by `GET /status`
pub const SERVICE_NAME: &str = "flask-app";

/// Body status returned by `GET /health`
pub const HEALTH_OK: &str = "OK";

/// Cache-Control value applied to every response
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Settings
// =============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default value of the `python_version` label when `PYTHON_VERSION` is unset
pub const DEFAULT_PYTHON_VERSION: &str = "3.9";

/// Default value of the `environment` label when `ENVIRONMENT` is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hostinfo=info,tower_http=info";

/// Log filter used when debug mode is enabled and RUST_LOG is not set
pub const DEBUG_LOG_FILTER: &str = "hostinfo=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// Environment variable names
pub const ENV_HOST: &str = "HOSTINFO_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_PYTHON_VERSION: &str = "PYTHON_VERSION";
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Informational labels reported by `GET /info`
    pub runtime: RuntimeConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Labels snapshotted at startup. These are informational only and are
/// never checked against the actual runtime.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub python_version: String,
    pub environment: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
    /// Raises the default log filter to debug
    pub debug: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
            debug: false,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Filter used when neither `--log-level` nor RUST_LOG is given
    pub fn default_filter(&self) -> &'static str {
        if self.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing sections and keys fall
    /// back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides using the given variable lookup.
    ///
    /// A variable that is set overrides the file value verbatim, even when
    /// empty. `PORT` must parse as a port number.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.http.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.http.port = port.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} is not a valid port: {:?}", ENV_PORT, port))
            })?;
        }
        if let Some(version) = lookup(ENV_PYTHON_VERSION) {
            self.runtime.python_version = version;
        }
        if let Some(environment) = lookup(ENV_ENVIRONMENT) {
            self.runtime.environment = environment;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format;
        }
        Ok(())
    }

    /// Apply command line flags, the highest-priority layer.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(host) = &overrides.host {
            self.http.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.http.port = port;
        }
        if overrides.debug {
            self.logging.debug = true;
        }
    }

    /// Check the final configuration before the server starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be non-zero".to_string(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                self.logging.format
            )));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Address the server binds to. `http.host` may be an IP literal or a
    /// resolvable name such as `localhost`; the first resolved address wins.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "http.host must not be empty".to_string(),
            ));
        }
        (self.http.host.as_str(), self.http.port)
            .to_socket_addrs()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host {:?}: {}",
                    self.http.host, e
                ))
            })?
            .next()
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "http.host {:?} resolved to no addresses",
                    self.http.host
                ))
            })
    }
}

/// Settings given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.runtime.python_version, "3.9");
        assert_eq!(config.runtime.environment, "development");
        assert_eq!(config.logging.format, "text");
        assert!(!config.logging.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_unset_keeps_defaults() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides_labels_verbatim() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(env(&[
                ("PYTHON_VERSION", "3.11"),
                ("ENVIRONMENT", "production"),
            ]))
            .unwrap();
        assert_eq!(config.runtime.python_version, "3.11");
        assert_eq!(config.runtime.environment, "production");
    }

    #[test]
    fn test_env_empty_value_is_kept() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(env(&[("ENVIRONMENT", "")]))
            .unwrap();
        assert_eq!(config.runtime.environment, "");
    }

    #[test]
    fn test_env_port_override() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(env(&[("PORT", "8080"), ("HOSTINFO_HOST", "127.0.0.1")]))
            .unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_env_invalid_port() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env_with(env(&[("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.http.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let mut config = AppConfig::default();
        config.http.host = " ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_generic_host_variable_is_ignored() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(env(&[("HOST", "build-agent-03.corp.example")]))
            .unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_host_override_accepts_hostname() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(env(&[("HOSTINFO_HOST", "localhost")]))
            .unwrap();
        assert!(config.validate().is_ok());
        let addr = config.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_cli_overrides_env_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 8000\n\n[logging]\ndebug = false").unwrap();

        let mut config = AppConfig::load(file.path()).unwrap();
        config
            .apply_env_with(env(&[("PORT", "9000"), ("HOSTINFO_HOST", "127.0.0.1")]))
            .unwrap();
        assert_eq!(config.http.port, 9000);

        config.apply_overrides(&ConfigOverrides {
            host: None,
            port: Some(7000),
            debug: true,
        });
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 7000);
        assert!(config.logging.debug);
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut config = AppConfig::default();
        config.apply_overrides(&ConfigOverrides::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[http]
port = 8000

[runtime]
environment = "staging"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.runtime.python_version, "3.9");
        assert_eq!(config.runtime.environment, "staging");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[runtime]\nenvironment = \"staging\"").unwrap();

        let mut config = AppConfig::load(file.path()).unwrap();
        config
            .apply_env_with(env(&[("ENVIRONMENT", "production")]))
            .unwrap();
        assert_eq!(config.runtime.environment, "production");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nport = ").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AppConfig::load("/nonexistent/hostinfo.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_debug_filter() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.default_filter(), DEFAULT_LOG_FILTER);
        logging.debug = true;
        assert_eq!(logging.default_filter(), DEBUG_LOG_FILTER);
    }
}

//! # Configuration Management
//!
//! Centralized configuration for the hub connector codec.
//!
//! A peer's configuration carries the codec limits, logging settings and the
//! peer's own list of hub connectors, so the list can be stored in TOML and
//! handed to the codec when it is shared with other peers.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Example
//! ```toml
//! [limits]
//! max_connectors = 1024
//! max_host_name_len = 255
//!
//! [logging]
//! app_name = "hub-connector"
//! log_level = "info"
//! json_format = false
//!
//! [[connectors]]
//! host_name = "10.20.35.100"
//! port = 6910
//! is_server = true
//! ```

use crate::core::codec::ConnectorCodec;
use crate::core::description::ConnectorDescription;
use crate::error::{ConnectorError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Default cap on connectors per list
pub const DEFAULT_MAX_CONNECTORS: u32 = 1024;

/// Host name cap applied by [`LimitsConfig::default`] (DNS names are at most
/// 253 bytes). The bare codec only enforces the field maximum.
pub const DEFAULT_MAX_HOST_NAME_LEN: u16 = 255;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HubConnectorConfig {
    /// Codec limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// This peer's hub connectors, in preference order
    #[serde(default)]
    pub connectors: Vec<ConnectorDescription>,
}

impl HubConnectorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| {
            ConnectorError::ConfigError(format!("Failed to open config file: {e}"))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            ConnectorError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ConnectorError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    ///
    /// `HUB_CONNECTOR_CONNECTORS` takes a comma-separated list in the
    /// `host:port[/server|/client]` text form.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(max) = std::env::var("HUB_CONNECTOR_MAX_CONNECTORS") {
            if let Ok(val) = max.parse::<u32>() {
                config.limits.max_connectors = val;
            }
        }

        if let Ok(max) = std::env::var("HUB_CONNECTOR_MAX_HOST_NAME_LEN") {
            if let Ok(val) = max.parse::<u16>() {
                config.limits.max_host_name_len = val;
            }
        }

        if let Ok(level) = std::env::var("HUB_CONNECTOR_LOG_LEVEL") {
            if let Ok(val) = level.parse::<Level>() {
                config.logging.log_level = val;
            }
        }

        if let Ok(list) = std::env::var("HUB_CONNECTOR_CONNECTORS") {
            config.connectors = parse_connector_list(&list)?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        let example = Self::default_with_overrides(|c| {
            c.connectors = vec![
                ConnectorDescription::server("10.20.35.100", 6910),
                ConnectorDescription::client("10.20.35.200", 6000),
            ];
        });
        toml::to_string_pretty(&example)
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            ConnectorError::ConfigError(format!("Failed to serialize config: {e}"))
        })?;

        std::fs::write(path, content).map_err(|e| {
            ConnectorError::ConfigError(format!("Failed to write config file: {e}"))
        })?;

        Ok(())
    }

    /// Codec enforcing the configured limits
    pub fn codec(&self) -> ConnectorCodec {
        self.limits.codec()
    }

    /// Encode this peer's connectors in the wire format
    pub fn encode_connectors(&self) -> Result<Bytes> {
        Ok(self.codec().encode(&self.connectors)?)
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        errors.extend(self.limits.validate());
        errors.extend(self.logging.validate());

        let codec = self.codec();
        if self.connectors.len() > codec.max_connectors() {
            errors.push(format!(
                "Too many connectors: {} (max_connectors: {})",
                self.connectors.len(),
                codec.max_connectors()
            ));
        }
        for (index, connector) in self.connectors.iter().enumerate() {
            if let Err(e) = connector.validate(codec.max_host_name_len()) {
                errors.push(format!("Connector #{index} ({connector}): {e}"));
            }
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConnectorError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn parse_connector_list(list: &str) -> Result<Vec<ConnectorDescription>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<ConnectorDescription>().map_err(|e| {
                ConnectorError::ConfigError(format!("Invalid connector '{entry}': {e}"))
            })
        })
        .collect()
}

/// Codec limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum number of connectors in one list
    pub max_connectors: u32,

    /// Maximum host name length in bytes
    pub max_host_name_len: u16,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_connectors: DEFAULT_MAX_CONNECTORS,
            max_host_name_len: DEFAULT_MAX_HOST_NAME_LEN,
        }
    }
}

impl LimitsConfig {
    pub fn codec(&self) -> ConnectorCodec {
        ConnectorCodec::with_limits(self.max_connectors, self.max_host_name_len)
    }

    /// Validate codec limits
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_connectors == 0 {
            errors.push("Max connectors must be greater than 0".to_string());
        } else if self.max_connectors > 1_000_000 {
            errors.push(format!(
                "Max connectors very high: {} (ensure peers can hold lists this large)",
                self.max_connectors
            ));
        }

        if self.max_host_name_len == 0 {
            errors.push("Max host name length must be greater than 0".to_string());
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("hub-connector"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_connector_list() {
        let list = parse_connector_list("10.20.35.100:6910/server, 10.20.35.200:6000,").unwrap();
        assert_eq!(
            list,
            vec![
                ConnectorDescription::server("10.20.35.100", 6910),
                ConnectorDescription::client("10.20.35.200", 6000),
            ]
        );
        assert!(parse_connector_list("").unwrap().is_empty());
        assert!(matches!(
            parse_connector_list("hub:70000"),
            Err(ConnectorError::ConfigError(_))
        ));
    }

    #[test]
    fn test_limits_drive_codec() {
        let limits = LimitsConfig {
            max_connectors: 2,
            max_host_name_len: 16,
        };
        let codec = limits.codec();
        assert_eq!(codec.max_connectors(), 2);
        assert_eq!(codec.max_host_name_len(), 16);
    }
}

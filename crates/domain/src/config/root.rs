use serde::{Deserialize, Serialize};
use std::fs;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverOptions;

/// Top-level configuration, loadable from a TOML file.
///
/// ```toml
/// [resolver]
/// timeout = 2000
/// tries = 2
/// servers = ["1.1.1.1", "8.8.8.8:53"]
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub timeout: Option<u64>,
    pub tries: Option<u32>,
    /// Replaces the configured servers when non-empty
    pub servers: Vec<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml(&content, path)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.timeout {
            self.resolver.timeout = Some(timeout);
        }
        if let Some(tries) = overrides.tries {
            self.resolver.tries = Some(tries);
        }
        if !overrides.servers.is_empty() {
            self.resolver.servers = overrides.servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Server addresses are deliberately left alone here: a bad address has
    /// to show up as a failed lookup, not as a startup error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logging.is_valid_level() {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }
        if self.resolver.tries == Some(0) {
            return Err(ConfigError::InvalidResolverOption(
                "tries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

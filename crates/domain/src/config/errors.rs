use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid log level: {0} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Invalid resolver option: {0}")]
    InvalidResolverOption(String),
}

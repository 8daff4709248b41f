//! Configuration module for dns-check
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Options forwarded to the resolver for every lookup
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverOptions;
pub use root::{CliOverrides, Config};

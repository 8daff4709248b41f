//! dns-check Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod health_check;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverOptions};
pub use dns_record::RecordType;
pub use errors::{AggregateFailure, LookupError, LookupErrorCode};
pub use health_check::HealthCheckRequest;

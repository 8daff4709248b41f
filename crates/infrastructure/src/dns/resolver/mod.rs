//! Resolver capability backed by `hickory-resolver`.
//!
//! - `config`: maps [`ResolverOptions`](dns_check_domain::ResolverOptions) onto hickory's
//!   resolver configuration
//! - `errors`: classifies hickory errors into lookup error codes
//! - `hickory`: the [`RecordResolver`](dns_check_application::ports::RecordResolver) adapter

pub mod config;
pub mod errors;
pub mod hickory;

pub use config::{build_resolver, parse_server, DEFAULT_DNS_PORT};
pub use errors::{error_code, lookup_error};
pub use hickory::HickoryRecordResolver;

use async_trait::async_trait;
use dns_check_domain::{LookupError, RecordType, ResolverOptions};
use std::net::IpAddr;

/// Resolver capability used by the dual-stack check.
///
/// Implementations own the whole query: transport, timeout, retries and
/// server selection all come from `options`. An empty answer must be reported
/// as an error (`ENODATA`), never as `Ok(vec![])`.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(
        &self,
        hostname: &str,
        record_type: RecordType,
        options: &ResolverOptions,
    ) -> Result<Vec<IpAddr>, LookupError>;
}

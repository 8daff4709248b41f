use async_trait::async_trait;
use dns_check_application::ports::RecordResolver;
use dns_check_domain::{LookupError, LookupErrorCode, RecordType, ResolverOptions};
use hickory_resolver::Name;
use std::net::IpAddr;
use tracing::debug;

use super::config::build_resolver;
use super::errors::lookup_error;

/// [`RecordResolver`] backed by `hickory-resolver`.
///
/// A fresh resolver is built for every lookup from the given options, so two
/// concurrent lookups never share sockets, caches or retry state.
#[derive(Debug, Clone, Default)]
pub struct HickoryRecordResolver;

impl HickoryRecordResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordResolver for HickoryRecordResolver {
    async fn resolve(
        &self,
        hostname: &str,
        record_type: RecordType,
        options: &ResolverOptions,
    ) -> Result<Vec<IpAddr>, LookupError> {
        let resolver = build_resolver(options).map_err(|message| {
            LookupError::new(hostname, record_type, LookupErrorCode::BadServer, message)
        })?;

        let name = Name::from_utf8(hostname).map_err(|e| {
            LookupError::new(hostname, record_type, LookupErrorCode::BadName, e.to_string())
        })?;

        debug!(hostname = %hostname, record_type = %record_type, "Querying resolver");

        let addresses: Vec<IpAddr> = match record_type {
            RecordType::A => resolver
                .ipv4_lookup(name)
                .await
                .map(|lookup| lookup.iter().map(|a| IpAddr::V4(a.0)).collect::<Vec<_>>()),
            RecordType::AAAA => resolver
                .ipv6_lookup(name)
                .await
                .map(|lookup| lookup.iter().map(|aaaa| IpAddr::V6(aaaa.0)).collect::<Vec<_>>()),
        }
        .map_err(|e| lookup_error(hostname, record_type, &e))?;

        if addresses.is_empty() {
            return Err(LookupError::new(
                hostname,
                record_type,
                LookupErrorCode::NoData,
                "no addresses returned",
            ));
        }

        debug!(
            hostname = %hostname,
            record_type = %record_type,
            count = addresses.len(),
            "Resolution complete"
        );
        Ok(addresses)
    }
}

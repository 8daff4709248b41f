use crate::ports::RecordResolver;
use dns_check_domain::{
    AggregateFailure, HealthCheckRequest, LookupError, LookupErrorCode, RecordType,
};
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Races an A and an AAAA lookup for the same hostname.
///
/// Both lookups are spawned as independent tasks. The first one to succeed
/// decides the outcome; the other keeps running until the resolver's own
/// timeout and its result is dropped. Only when both fail is an
/// [`AggregateFailure`] returned, with failures in A, AAAA order.
pub struct DualStackCheckUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl DualStackCheckUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the record type whose lookup succeeded first.
    pub async fn execute(
        &self,
        request: &HealthCheckRequest,
    ) -> Result<RecordType, AggregateFailure> {
        debug!(hostname = %request.hostname, "Racing A and AAAA lookups");

        let mut lookups = FuturesUnordered::new();
        for record_type in RecordType::DUAL_STACK {
            let resolver = Arc::clone(&self.resolver);
            let hostname = Arc::clone(&request.hostname);
            let options = request.options.clone();
            let handle = tokio::spawn(async move {
                resolver.resolve(&hostname, record_type, &options).await
            });
            lookups.push(handle.map(move |joined| (record_type, joined)));
        }

        let mut failures: [Option<LookupError>; 2] = [None, None];

        while let Some((record_type, joined)) = lookups.next().await {
            match joined {
                Ok(Ok(addresses)) => {
                    debug!(
                        hostname = %request.hostname,
                        record_type = %record_type,
                        addresses = addresses.len(),
                        "Lookup succeeded"
                    );
                    return Ok(record_type);
                }
                Ok(Err(e)) => {
                    debug!(
                        hostname = %request.hostname,
                        record_type = %record_type,
                        code = %e.code,
                        error = %e.message,
                        "Lookup failed"
                    );
                    failures[record_type.index()] = Some(e);
                }
                Err(e) => {
                    warn!(record_type = %record_type, error = %e, "Lookup task panicked");
                    failures[record_type.index()] = Some(LookupError::new(
                        Arc::clone(&request.hostname),
                        record_type,
                        LookupErrorCode::Other,
                        e.to_string(),
                    ));
                }
            }
        }

        match failures {
            [Some(a), Some(aaaa)] => Err(AggregateFailure::new(a, aaaa)),
            _ => unreachable!("every lookup either succeeds or records a failure"),
        }
    }
}

use dns_check_application::use_cases::DualStackCheckUseCase;
use dns_check_domain::{AggregateFailure, HealthCheckRequest, ResolverOptions};
use std::sync::Arc;

use super::resolver::HickoryRecordResolver;

/// Check that `hostname` resolves over at least one address family.
///
/// A and AAAA lookups run concurrently with the same `options`; the first
/// success wins and the slower lookup is left to finish on its own. Returns
/// [`AggregateFailure`] (A failure first, AAAA second) when neither resolves.
///
/// ```no_run
/// # async fn run() {
/// use dns_check_domain::ResolverOptions;
///
/// dns_check_infrastructure::check("localhost", None).await.unwrap();
///
/// let options = ResolverOptions::default().with_timeout(100).with_servers(["192.0.2.1"]);
/// let err = dns_check_infrastructure::check("example.com", Some(options))
///     .await
///     .unwrap_err();
/// assert_eq!(err.errors().len(), 2);
/// # }
/// ```
pub async fn check(hostname: &str, options: Option<ResolverOptions>) -> Result<(), AggregateFailure> {
    let request = HealthCheckRequest::new(hostname).with_options(options);
    DualStackCheckUseCase::new(Arc::new(HickoryRecordResolver::new()))
        .execute(&request)
        .await
        .map(|_| ())
}

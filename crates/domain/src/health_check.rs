use crate::config::ResolverOptions;
use std::sync::Arc;

/// A single reachability check: one hostname plus the resolver options
/// forwarded to both the A and AAAA lookups.
///
/// The hostname is kept verbatim. Empty or malformed names are left for the
/// resolver to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckRequest {
    pub hostname: Arc<str>,
    pub options: ResolverOptions,
}

impl HealthCheckRequest {
    pub fn new(hostname: impl Into<Arc<str>>) -> Self {
        Self {
            hostname: hostname.into(),
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: Option<ResolverOptions>) -> Self {
        self.options = options.unwrap_or_default();
        self
    }
}

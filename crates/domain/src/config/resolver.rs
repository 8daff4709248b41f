use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options handed to the resolver for each lookup.
///
/// Every field is optional: `None`/empty leaves the resolver's own default in
/// place. The check never interprets these values itself, so a malformed
/// server address is only rejected when a lookup tries to use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverOptions {
    /// Milliseconds before a single query is abandoned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Attempts per query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tries: Option<u32>,

    /// Resolver endpoints to use instead of the system configuration,
    /// e.g. "8.8.8.8", "1.1.1.1:53", "[2001:4860:4860::8888]:53"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<String>,
}

impl ResolverOptions {
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    pub fn with_tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    pub fn with_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.servers = servers.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_millis)
    }

    /// True when nothing overrides the resolver defaults.
    pub fn is_default(&self) -> bool {
        self.timeout.is_none() && self.tries.is_none() && self.servers.is_empty()
    }
}

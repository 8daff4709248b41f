use async_trait::async_trait;
use dns_check_application::ports::RecordResolver;
use dns_check_domain::{LookupError, LookupErrorCode, RecordType, ResolverOptions};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock RecordResolver
// ============================================================================

#[derive(Clone, Debug)]
pub enum Outcome {
    Resolve(Vec<IpAddr>),
    Fail(LookupErrorCode),
    Panic,
}

#[derive(Clone)]
struct Script {
    delay: Duration,
    outcome: Outcome,
}

/// Resolver with a scripted delay and outcome per record type.
#[derive(Clone)]
pub struct MockRecordResolver {
    scripts: Arc<RwLock<HashMap<RecordType, Script>>>,
    calls: Arc<RwLock<Vec<(String, RecordType, ResolverOptions)>>>,
    started: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self {
            scripts: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            started: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn script(&self, record_type: RecordType, delay_ms: u64, outcome: Outcome) {
        self.scripts.write().await.insert(
            record_type,
            Script {
                delay: Duration::from_millis(delay_ms),
                outcome,
            },
        );
    }

    pub async fn calls(&self) -> Vec<(String, RecordType, ResolverOptions)> {
        self.calls.read().await.clone()
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Lookups that ran to the end of their scripted delay.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl Default for MockRecordResolver {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ipv4() -> Vec<IpAddr> {
    vec!["93.184.216.34".parse().unwrap()]
}

pub fn ipv6() -> Vec<IpAddr> {
    vec!["2606:2800:220:1:248:1893:25c8:1946".parse().unwrap()]
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(
        &self,
        hostname: &str,
        record_type: RecordType,
        options: &ResolverOptions,
    ) -> Result<Vec<IpAddr>, LookupError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.calls
            .write()
            .await
            .push((hostname.to_string(), record_type, options.clone()));

        let script = self.scripts.read().await.get(&record_type).cloned();
        let script = script.unwrap_or(Script {
            delay: Duration::ZERO,
            outcome: Outcome::Fail(LookupErrorCode::NotFound),
        });

        tokio::time::sleep(script.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);

        match script.outcome {
            Outcome::Resolve(addresses) => Ok(addresses),
            Outcome::Fail(code) => Err(LookupError::new(
                hostname,
                record_type,
                code,
                format!("mock {} failure", code),
            )),
            Outcome::Panic => panic!("mock resolver panicked"),
        }
    }
}

use dns_check_domain::{AggregateFailure, LookupError, RecordType};
use serde::Serialize;

/// Result of checking one hostname, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub hostname: String,
    pub healthy: bool,
    /// Record type of the lookup that succeeded first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    /// A failure first, AAAA second; empty when healthy
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<LookupError>,
    #[serde(skip)]
    detail: String,
}

impl CheckReport {
    pub fn from_outcome(hostname: &str, outcome: Result<RecordType, AggregateFailure>) -> Self {
        match outcome {
            Ok(record_type) => Self {
                hostname: hostname.to_string(),
                healthy: true,
                record_type: Some(record_type),
                errors: Vec::new(),
                detail: String::new(),
            },
            Err(failure) => Self {
                hostname: hostname.to_string(),
                healthy: false,
                record_type: None,
                detail: format!("{}: {}", failure, failure.detail()),
                errors: failure.into_errors().into(),
            },
        }
    }

    pub fn to_line(&self) -> String {
        match self.record_type {
            Some(record_type) if self.healthy => format!("{}: ok ({})", self.hostname, record_type),
            _ => format!("{}: FAILED [{}]", self.hostname, self.detail),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

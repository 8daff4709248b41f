use crate::dns_record::RecordType;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Classification of a single failed lookup.
///
/// Codes follow the names resolver libraries commonly expose so callers can
/// match on them (`ENOTFOUND`, `ENODATA`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LookupErrorCode {
    /// The name does not exist (NXDOMAIN)
    #[serde(rename = "ENOTFOUND")]
    NotFound,
    /// The name exists but has no records of the requested type
    #[serde(rename = "ENODATA")]
    NoData,
    #[serde(rename = "ETIMEOUT")]
    Timeout,
    /// The hostname could not be parsed as a domain name
    #[serde(rename = "EBADNAME")]
    BadName,
    /// A configured resolver server address could not be parsed
    #[serde(rename = "EBADSERVER")]
    BadServer,
    #[serde(rename = "ESERVFAIL")]
    ServerFailure,
    #[serde(rename = "EREFUSED")]
    Refused,
    /// No connection to any resolver server could be used
    #[serde(rename = "ECONNREFUSED")]
    ConnectionRefused,
    #[serde(rename = "EOTHER")]
    Other,
}

impl LookupErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorCode::NotFound => "ENOTFOUND",
            LookupErrorCode::NoData => "ENODATA",
            LookupErrorCode::Timeout => "ETIMEOUT",
            LookupErrorCode::BadName => "EBADNAME",
            LookupErrorCode::BadServer => "EBADSERVER",
            LookupErrorCode::ServerFailure => "ESERVFAIL",
            LookupErrorCode::Refused => "EREFUSED",
            LookupErrorCode::ConnectionRefused => "ECONNREFUSED",
            LookupErrorCode::Other => "EOTHER",
        }
    }

    /// True for the answers that mean "this name does not resolve" as opposed
    /// to "the resolver could not answer".
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, LookupErrorCode::NotFound | LookupErrorCode::NoData)
    }
}

impl fmt::Display for LookupErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of one record-type lookup, as reported by the resolver.
///
/// `message` is the resolver's own error text, kept unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{record_type} lookup for {hostname:?} failed ({code}): {message}")]
pub struct LookupError {
    pub hostname: Arc<str>,
    pub record_type: RecordType,
    pub code: LookupErrorCode,
    pub message: String,
}

impl LookupError {
    pub fn new(
        hostname: impl Into<Arc<str>>,
        record_type: RecordType,
        code: LookupErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            record_type,
            code,
            message: message.into(),
        }
    }
}

/// Both the A and the AAAA lookup failed.
///
/// Failures are always stored in request order (A first, AAAA second),
/// independent of which one completed first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("all lookups failed")]
pub struct AggregateFailure {
    errors: [LookupError; 2],
}

impl AggregateFailure {
    pub fn new(a: LookupError, aaaa: LookupError) -> Self {
        Self { errors: [a, aaaa] }
    }

    pub fn errors(&self) -> &[LookupError] {
        &self.errors
    }

    pub fn a(&self) -> &LookupError {
        &self.errors[0]
    }

    pub fn aaaa(&self) -> &LookupError {
        &self.errors[1]
    }

    pub fn into_errors(self) -> [LookupError; 2] {
        self.errors
    }

    /// One-line rendering of both inner failures, e.g.
    /// `A: ENOTFOUND (...), AAAA: ENOTFOUND (...)`.
    pub fn detail(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {} ({})", e.record_type, e.code, e.message))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

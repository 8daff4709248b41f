use dns_check_domain::{LookupError, LookupErrorCode, RecordType};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, ResolveErrorKind};

/// Classify a hickory error. The error text itself is kept by [`lookup_error`].
pub fn error_code(err: &ResolveError) -> LookupErrorCode {
    match err.kind() {
        ResolveErrorKind::Proto(proto) => proto_error_code(proto.kind()),
        _ => LookupErrorCode::Other,
    }
}

fn proto_error_code(kind: &ProtoErrorKind) -> LookupErrorCode {
    match kind {
        ProtoErrorKind::NoRecordsFound { response_code, .. } => {
            response_error_code(*response_code)
        }
        ProtoErrorKind::Timeout => LookupErrorCode::Timeout,
        ProtoErrorKind::NoConnections | ProtoErrorKind::Io(_) => {
            LookupErrorCode::ConnectionRefused
        }
        _ => LookupErrorCode::Other,
    }
}

/// Code for an answer that carried no records of the requested type.
pub fn response_error_code(response_code: ResponseCode) -> LookupErrorCode {
    match response_code {
        ResponseCode::NXDomain => LookupErrorCode::NotFound,
        ResponseCode::NoError => LookupErrorCode::NoData,
        ResponseCode::ServFail => LookupErrorCode::ServerFailure,
        ResponseCode::Refused => LookupErrorCode::Refused,
        _ => LookupErrorCode::Other,
    }
}

pub fn lookup_error(hostname: &str, record_type: RecordType, err: &ResolveError) -> LookupError {
    LookupError::new(hostname, record_type, error_code(err), err.to_string())
}

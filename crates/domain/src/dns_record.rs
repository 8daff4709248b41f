use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Address record types queried by the dual-stack check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    AAAA,
}

impl RecordType {
    /// Both families, in the order their failures are reported.
    pub const DUAL_STACK: [RecordType; 2] = [RecordType::A, RecordType::AAAA];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
        }
    }

    /// Wire format number (RFC 1035 / RFC 3596)
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::AAAA => 28,
        }
    }

    /// Slot of this record type in [`RecordType::DUAL_STACK`].
    pub fn index(&self) -> usize {
        match self {
            RecordType::A => 0,
            RecordType::AAAA => 1,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            other => Err(format!("Unsupported record type: {}", other)),
        }
    }
}

use super::DnsRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::NoError)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

/// Body of a locally generated reply; the envelope (id, question, flags) is
/// filled in from the request by the wire layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub authoritative: bool,
    pub rcode: ResponseCode,
    pub records: Vec<DnsRecord>,
}

impl DnsAnswer {
    pub fn authoritative(records: Vec<DnsRecord>) -> Self {
        Self {
            authoritative: true,
            rcode: ResponseCode::NoError,
            records,
        }
    }

    /// Authoritative SERVFAIL with no records, used for query types the
    /// zone does not synthesize.
    pub fn unsupported() -> Self {
        Self {
            authoritative: true,
            rcode: ResponseCode::ServFail,
            records: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.rcode.is_success()
    }
}

use super::{RecordType, CLASS_IN};
use std::sync::Arc;

/// One question taken from an inbound request.
///
/// `payload` is the upstream-ready wire form of the request for this
/// question. The core never looks inside it; the forwarder sends it as-is.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub class: u16,
    pub payload: Arc<[u8]>,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            class: CLASS_IN,
            payload: Arc::from(Vec::new()),
        }
    }

    pub fn with_class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn with_payload(mut self, payload: impl Into<Arc<[u8]>>) -> Self {
        self.payload = payload.into();
        self
    }
}

use async_trait::async_trait;
use localdns_domain::{DnsQuery, ResponseCode};
use std::net::SocketAddr;

/// Reply relayed for a forwarded question.
///
/// `wire` is ready to send back to the client. When every resolver failed,
/// `resolver` is `None` and `wire` is a locally built SERVFAIL.
#[derive(Debug, Clone)]
pub struct ForwardedReply {
    pub resolver: Option<SocketAddr>,
    pub rcode: ResponseCode,
    pub answer_count: usize,
    pub wire: Vec<u8>,
}

impl ForwardedReply {
    pub fn relayed(resolver: SocketAddr, rcode: ResponseCode, answer_count: usize, wire: Vec<u8>) -> Self {
        Self {
            resolver: Some(resolver),
            rcode,
            answer_count,
            wire,
        }
    }

    pub fn exhausted(wire: Vec<u8>) -> Self {
        Self {
            resolver: None,
            rcode: ResponseCode::ServFail,
            answer_count: 0,
            wire,
        }
    }

    pub fn is_relayed(&self) -> bool {
        self.resolver.is_some()
    }
}

#[async_trait]
pub trait DnsForwarder: Send + Sync {
    /// Sends the question's payload to the upstream resolvers in order and
    /// returns the first reply received. Never fails: exhaustion is reported
    /// through [`ForwardedReply::exhausted`].
    async fn forward(&self, query: &DnsQuery) -> ForwardedReply;
}

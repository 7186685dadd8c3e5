use async_trait::async_trait;
use localdns_application::ports::{DnsForwarder, ForwardedReply};
use localdns_domain::{DnsQuery, ResponseCode};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Records every forwarded question and replies from a per-name table.
/// Unknown names get an exhausted (SERVFAIL, no resolver) reply.
#[derive(Clone, Default)]
pub struct MockDnsForwarder {
    replies: Arc<Mutex<HashMap<String, ForwardedReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDnsForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reply(&self, domain: &str, reply: ForwardedReply) {
        self.replies
            .lock()
            .unwrap()
            .insert(domain.to_string(), reply);
    }

    pub fn relay_from(&self, domain: &str, resolver: &str, rcode: ResponseCode, answers: usize) {
        let resolver: SocketAddr = resolver.parse().unwrap();
        self.set_reply(
            domain,
            ForwardedReply::relayed(resolver, rcode, answers, vec![0xab, 0xcd]),
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsForwarder for MockDnsForwarder {
    async fn forward(&self, query: &DnsQuery) -> ForwardedReply {
        self.calls.lock().unwrap().push(query.domain.to_string());
        self.replies
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or_else(|| ForwardedReply::exhausted(Vec::new()))
    }
}

use super::dns_server_mock::{MockBehavior, MockDnsServer};
use async_trait::async_trait;
use localdns_domain::DomainError;
use localdns_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ScriptedStep {
    Reply(MockBehavior),
    Fail(DomainError),
}

/// In-process transport: answers through the mock server's reply builder
/// or fails with a fixed error, without touching the network.
pub struct ScriptedTransport {
    addr: SocketAddr,
    step: ScriptedStep,
    calls: Arc<AtomicUsize>,
}

impl ScriptedTransport {
    pub fn new(addr: &str, step: ScriptedStep) -> Self {
        Self {
            addr: addr.parse().unwrap(),
            step,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.step {
            ScriptedStep::Fail(e) => Err(e.clone()),
            ScriptedStep::Reply(behavior) => {
                match MockDnsServer::build_mock_response(message_bytes, *behavior) {
                    Some(bytes) => Ok(TransportResponse { bytes }),
                    None => Err(DomainError::TransportTimeout {
                        server: self.addr.to_string(),
                    }),
                }
            }
        }
    }

    fn server_addr(&self) -> SocketAddr {
        self.addr
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}

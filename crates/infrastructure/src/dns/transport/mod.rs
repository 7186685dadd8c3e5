pub mod udp;

use async_trait::async_trait;
use localdns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

/// One request/response exchange with a single upstream resolver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn server_addr(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}

pub fn create_transport(server_addr: SocketAddr) -> Arc<dyn DnsTransport> {
    Arc::new(udp::UdpTransport::new(server_addr))
}

use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{create_transport, DnsTransport};
use async_trait::async_trait;
use localdns_application::ports::{DnsForwarder, ForwardedReply};
use localdns_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Sequential failover over a fixed, ordered resolver list.
///
/// Each resolver gets one bounded exchange per query. The first reply that
/// decodes is relayed whatever its response code; only transport failures
/// move on to the next resolver.
pub struct UpstreamForwarder {
    transports: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(resolvers: &[SocketAddr], timeout: Duration) -> Self {
        Self::with_transports(resolvers.iter().copied().map(create_transport).collect(), timeout)
    }

    pub fn with_transports(transports: Vec<Arc<dyn DnsTransport>>, timeout: Duration) -> Self {
        Self {
            transports,
            timeout,
        }
    }

    pub fn resolvers(&self) -> Vec<SocketAddr> {
        self.transports.iter().map(|t| t.server_addr()).collect()
    }

    async fn try_resolver(
        &self,
        transport: &dyn DnsTransport,
        payload: &[u8],
    ) -> Result<ForwardedReply, DomainError> {
        let server = transport.server_addr();
        let response = transport.send(payload, self.timeout).await?;
        let reply = ResponseParser::parse(server, &response.bytes)?;
        Ok(ForwardedReply::relayed(
            server,
            reply.rcode,
            reply.answer_count,
            reply.wire,
        ))
    }

    fn exhausted_reply(query: &DnsQuery) -> ForwardedReply {
        let wire = match MessageBuilder::build_servfail_for(&query.payload) {
            Ok(wire) => wire,
            Err(e) => {
                error!(domain = %query.domain, error = %e, "Failed to build SERVFAIL reply");
                Vec::new()
            }
        };
        ForwardedReply::exhausted(wire)
    }
}

#[async_trait]
impl DnsForwarder for UpstreamForwarder {
    async fn forward(&self, query: &DnsQuery) -> ForwardedReply {
        debug!(
            strategy = "failover",
            servers = self.transports.len(),
            domain = %query.domain,
            "Trying sequentially"
        );

        for (index, transport) in self.transports.iter().enumerate() {
            let start = Instant::now();
            match self.try_resolver(transport.as_ref(), &query.payload).await {
                Ok(reply) => {
                    debug!(
                        server = %transport.server_addr(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        position = index,
                        "Server responded"
                    );
                    return reply;
                }
                Err(e) => {
                    warn!(
                        server = %transport.server_addr(),
                        protocol = transport.protocol_name(),
                        error = %e,
                        position = index,
                        "Failing over"
                    );
                }
            }
        }

        warn!(domain = %query.domain, error = %DomainError::TransportAllServersUnreachable, "Upstream exhausted");
        Self::exhausted_reply(query)
    }
}

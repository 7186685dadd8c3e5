use localdns_application::services::{AnswerSynthesizer, ZoneClassifier};
use localdns_application::use_cases::HandleDnsQueryUseCase;
use localdns_domain::{Config, ZoneConfig};
use localdns_infrastructure::dns::forwarding::UpstreamForwarder;
use localdns_infrastructure::dns::server::DnsServerHandler;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub zone: Arc<ZoneConfig>,
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, listen_address: Ipv4Addr) -> anyhow::Result<Self> {
        let zone = Arc::new(config.zone_config(listen_address));

        let resolvers = config.upstream.resolvers()?;
        let forwarder = Arc::new(UpstreamForwarder::new(
            &resolvers,
            config.upstream.query_timeout(),
        ));
        info!(
            resolvers = ?forwarder.resolvers(),
            timeout_ms = config.upstream.query_timeout_ms,
            "Upstream forwarder ready"
        );

        let handler_use_case = Arc::new(
            HandleDnsQueryUseCase::new(
                Arc::new(ZoneClassifier::new(Arc::clone(&zone))),
                Arc::new(AnswerSynthesizer::new(Arc::clone(&zone))),
                forwarder,
            )
            .with_question_policy(config.server.question_policy),
        );

        Ok(Self {
            zone,
            handler_use_case,
        })
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(Arc::clone(&self.handler_use_case))
    }
}

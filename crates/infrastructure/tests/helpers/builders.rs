use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use localdns_application::services::{AnswerSynthesizer, ZoneClassifier};
use localdns_application::use_cases::HandleDnsQueryUseCase;
use localdns_domain::{QuestionPolicy, ZoneConfig};
use localdns_infrastructure::dns::forwarding::{MessageBuilder, UpstreamForwarder};
use localdns_infrastructure::dns::server::DnsServerHandler;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

pub const LISTEN_ADDRESS: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 5);
pub const UPSTREAM_ANSWER: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(200);

pub fn test_zone() -> Arc<ZoneConfig> {
    Arc::new(ZoneConfig::new(LISTEN_ADDRESS, "example.org", "10.0.0", 60))
}

pub fn build_handler(resolvers: &[SocketAddr], policy: QuestionPolicy) -> DnsServerHandler {
    let zone = test_zone();
    let forwarder = Arc::new(UpstreamForwarder::new(resolvers, SHORT_TIMEOUT));
    let use_case = HandleDnsQueryUseCase::new(
        Arc::new(ZoneClassifier::new(Arc::clone(&zone))),
        Arc::new(AnswerSynthesizer::new(zone)),
        forwarder,
    )
    .with_question_policy(policy);
    DnsServerHandler::new(Arc::new(use_case))
}

pub fn request_message(id: u16, questions: &[(&str, RecordType)]) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    for (name, record_type) in questions {
        message.add_query(Query::query(Name::from_str(name).unwrap(), *record_type));
    }
    message
}

pub fn request_bytes(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    MessageBuilder::serialize_message(&request_message(id, questions)).unwrap()
}

pub fn random_id() -> u16 {
    fastrand::u16(..)
}

/// Loopback address with nothing listening on it.
pub async fn closed_port() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap()
}

#![allow(dead_code)]

pub mod upstream;

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use localdns_application::services::{AnswerSynthesizer, ZoneClassifier};
use localdns_application::use_cases::HandleDnsQueryUseCase;
use localdns_domain::{Config, QuestionPolicy, ZoneConfig};
use localdns_infrastructure::dns::forwarding::UpstreamForwarder;
use localdns_infrastructure::dns::server::DnsServerHandler;
use localdns_infrastructure::dns::udp_server::{bind_udp_socket, serve};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

pub use upstream::{Upstream, UpstreamBehavior};

pub const ZONE_ADDRESS: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 5);
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(3);

/// A localdns listener on an ephemeral loopback port.
pub struct RunningServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl RunningServer {
    pub async fn start(zone: ZoneConfig, resolvers: &[SocketAddr], policy: QuestionPolicy) -> Self {
        let zone = Arc::new(zone);
        let forwarder = Arc::new(UpstreamForwarder::new(resolvers, Duration::from_millis(250)));
        let use_case = HandleDnsQueryUseCase::new(
            Arc::new(ZoneClassifier::new(Arc::clone(&zone))),
            Arc::new(AnswerSynthesizer::new(zone)),
            forwarder,
        )
        .with_question_policy(policy);
        Self::start_with_handler(DnsServerHandler::new(Arc::new(use_case)))
    }

    pub async fn from_config(config: &Config, listen_address: Ipv4Addr) -> Self {
        let resolvers = config.upstream.resolvers().unwrap();
        let zone = config.zone_config(listen_address);
        let forwarder = Arc::new(UpstreamForwarder::new(
            &resolvers,
            config.upstream.query_timeout(),
        ));
        let zone = Arc::new(zone);
        let use_case = HandleDnsQueryUseCase::new(
            Arc::new(ZoneClassifier::new(Arc::clone(&zone))),
            Arc::new(AnswerSynthesizer::new(zone)),
            forwarder,
        )
        .with_question_policy(config.server.question_policy);
        Self::start_with_handler(DnsServerHandler::new(Arc::new(use_case)))
    }

    fn start_with_handler(handler: DnsServerHandler) -> Self {
        let socket = bind_udp_socket(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
        let addr = socket.local_addr().unwrap();
        let task = tokio::spawn(async move {
            let _ = serve(Arc::new(socket), Arc::new(handler)).await;
        });
        Self { addr, task }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn test_zone() -> ZoneConfig {
    ZoneConfig::new(ZONE_ADDRESS, "example.org", "10.0.0", 60)
}

pub fn query_bytes(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    for (name, record_type) in questions {
        message.add_query(Query::query(Name::from_str(name).unwrap(), *record_type));
    }
    encode(&message)
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Sends one datagram and collects `expected` replies.
pub async fn exchange(server: SocketAddr, request: &[u8], expected: usize) -> Vec<Message> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(request, server).await.unwrap();

    let mut replies = Vec::with_capacity(expected);
    let mut buf = vec![0u8; 4096];
    for _ in 0..expected {
        let (len, _) = tokio::time::timeout(CLIENT_TIMEOUT, client.recv_from(&mut buf))
            .await
            .expect("timed out waiting for reply")
            .unwrap();
        replies.push(Message::from_vec(&buf[..len]).unwrap());
    }
    replies
}

pub async fn ask(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let id = fastrand::u16(..);
    let mut replies = exchange(server, &query_bytes(id, &[(name, record_type)]), 1).await;
    let reply = replies.remove(0);
    assert_eq!(reply.id(), id);
    reply
}

/// Waits briefly and reports whether any further datagram arrived.
pub async fn nothing_more(client: &UdpSocket) -> bool {
    let mut buf = vec![0u8; 4096];
    tokio::time::timeout(Duration::from_millis(300), client.recv_from(&mut buf))
        .await
        .is_err()
}

/// Loopback port with nothing listening on it.
pub async fn closed_port() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap()
}

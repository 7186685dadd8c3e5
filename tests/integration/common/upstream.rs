use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy)]
pub enum UpstreamBehavior {
    Answer(Ipv4Addr),
    Rcode(ResponseCode),
    Silent,
}

/// Fake recursive resolver on a loopback port.
pub struct Upstream {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl Upstream {
    pub async fn start(behavior: UpstreamBehavior) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let task_hits = Arc::clone(&hits);
        let task = tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                task_hits.fetch_add(1, Ordering::SeqCst);
                if let Some(reply) = respond(&buf[..len], behavior) {
                    let _ = socket.send_to(&reply, peer).await;
                }
            }
        });

        Self { addr, hits, task }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for Upstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn respond(query: &[u8], behavior: UpstreamBehavior) -> Option<Vec<u8>> {
    let (rcode, address) = match behavior {
        UpstreamBehavior::Silent => return None,
        UpstreamBehavior::Answer(ip) => (ResponseCode::NoError, Some(ip)),
        UpstreamBehavior::Rcode(rcode) => (rcode, None),
    };

    let request = Message::from_vec(query).ok()?;
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true)
        .set_response_code(rcode);

    for question in request.queries() {
        response.add_query(question.clone());
        if let Some(ip) = address {
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                300,
                RData::A(A(ip)),
            ));
        }
    }

    Some(super::encode(&response))
}

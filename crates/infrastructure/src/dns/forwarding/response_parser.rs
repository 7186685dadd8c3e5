use super::message_builder::MessageBuilder;
use super::record_type_map::ResponseCodeMapper;
use hickory_proto::op::{Message, MessageType};
use localdns_domain::{DomainError, ResponseCode};
use std::net::SocketAddr;
use tracing::debug;

/// Upstream reply decoded far enough to log it, plus the bytes to relay.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub rcode: ResponseCode,
    pub answer_count: usize,
    pub wire: Vec<u8>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a reply from `server` and re-encodes it with name
    /// compression. Anything that does not decode as a DNS response is an
    /// [`DomainError::InvalidDnsResponse`].
    pub fn parse(server: SocketAddr, response_bytes: &[u8]) -> Result<UpstreamReply, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse {
                server: server.to_string(),
                reason: e.to_string(),
            }
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse {
                server: server.to_string(),
                reason: "QR bit not set".to_string(),
            });
        }

        let rcode = ResponseCodeMapper::from_hickory(message.response_code());
        let wire = match MessageBuilder::serialize_message(&message) {
            Ok(wire) => wire,
            Err(e) => {
                debug!(server = %server, error = %e, "Re-encoding failed, relaying original bytes");
                response_bytes.to_vec()
            }
        };

        debug!(
            server = %server,
            rcode = %rcode,
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(UpstreamReply {
            rcode,
            answer_count: message.answers().len(),
            wire,
        })
    }
}

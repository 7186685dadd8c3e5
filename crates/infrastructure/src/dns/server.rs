use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use localdns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use localdns_domain::{DnsQuery, DnsRequest};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns one inbound datagram into the datagrams to send back.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// One reply per routed question, in question order. Responses and
    /// non-query opcodes yield nothing; undecodable datagrams get FORMERR
    /// when a transaction id can be read.
    pub async fn handle_datagram(&self, datagram: &[u8], client_ip: IpAddr) -> Vec<Vec<u8>> {
        let request = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client_ip, error = %e, len = datagram.len(), "Failed to parse DNS request");
                return MessageBuilder::build_header_only_response(datagram, ResponseCode::FormErr)
                    .into_iter()
                    .collect();
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client_ip, id = request.id(), "Ignoring inbound response");
            return Vec::new();
        }
        if request.op_code() != OpCode::Query {
            debug!(client = %client_ip, op_code = ?request.op_code(), "Ignoring non-query opcode");
            return Vec::new();
        }

        let questions = request.queries();
        let requests: Vec<DnsRequest> = questions
            .iter()
            .map(|q| DnsRequest::new(Self::to_dns_query(&request, q, datagram), client_ip))
            .collect();

        let outcomes = self.use_case.execute_all(&requests).await;

        outcomes
            .into_iter()
            .zip(questions)
            .filter_map(|(outcome, question)| Self::encode_outcome(&request, question, outcome))
            .collect()
    }

    fn to_dns_query(request: &Message, question: &Query, datagram: &[u8]) -> DnsQuery {
        let payload = if request.queries().len() == 1 {
            datagram.to_vec()
        } else {
            MessageBuilder::build_upstream_query(request, question).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to split question, forwarding whole request");
                datagram.to_vec()
            })
        };

        DnsQuery::new(
            question.name().to_ascii(),
            RecordTypeMapper::from_hickory(question.query_type()),
        )
        .with_class(u16::from(question.query_class()))
        .with_payload(payload)
    }

    fn encode_outcome(request: &Message, question: &Query, outcome: QueryOutcome) -> Option<Vec<u8>> {
        match outcome {
            QueryOutcome::Local { answer, .. } => {
                match MessageBuilder::build_authoritative_response(request, question, &answer) {
                    Ok(wire) => Some(wire),
                    Err(e) => {
                        error!(domain = %question.name(), error = %e, "Failed to encode local answer");
                        MessageBuilder::build_error_response(request, Some(question), ResponseCode::ServFail)
                            .ok()
                    }
                }
            }
            QueryOutcome::Forwarded(reply) if !reply.wire.is_empty() => Some(reply.wire),
            QueryOutcome::Forwarded(_) => {
                MessageBuilder::build_error_response(request, Some(question), ResponseCode::ServFail)
                    .ok()
            }
        }
    }
}

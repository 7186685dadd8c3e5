//! DNS Message Builder
//!
//! Builds reply envelopes and per-question upstream requests in wire format
//! using `hickory-proto`.

use super::record_type_map::ResponseCodeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, MX, NS, PTR, SOA};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use localdns_domain::{DnsAnswer, DnsRecord, DomainError, RecordData};
use std::str::FromStr;

const DNS_HEADER_LEN: usize = 12;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Request carrying a single question of a multi-question request. Id,
    /// opcode and the RD flag are taken from the original.
    pub fn build_upstream_query(request: &Message, query: &Query) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new();
        message
            .set_id(request.id())
            .set_message_type(MessageType::Query)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .add_query(query.clone());

        Self::serialize_message(&message)
    }

    /// Reply to one question of `request` with locally synthesized records.
    /// Every record is owned by the question name exactly as received.
    pub fn build_authoritative_response(
        request: &Message,
        query: &Query,
        answer: &DnsAnswer,
    ) -> Result<Vec<u8>, DomainError> {
        let mut message = Self::reply_envelope(request, query);
        message
            .set_authoritative(answer.authoritative)
            .set_response_code(ResponseCodeMapper::to_hickory(answer.rcode));

        for record in &answer.records {
            message.add_answer(Self::to_hickory_record(query.name().clone(), record)?);
        }

        Self::serialize_message(&message)
    }

    /// Empty reply to one question of `request` carrying `rcode`.
    pub fn build_error_response(
        request: &Message,
        query: Option<&Query>,
        rcode: ResponseCode,
    ) -> Result<Vec<u8>, DomainError> {
        let mut message = match query {
            Some(query) => Self::reply_envelope(request, query),
            None => Self::bare_envelope(request.id(), request.op_code(), request.recursion_desired()),
        };
        message.set_response_code(rcode);
        Self::serialize_message(&message)
    }

    /// SERVFAIL for a request payload that will not be answered otherwise.
    /// Falls back to a header-only reply when the payload does not parse.
    pub fn build_servfail_for(payload: &[u8]) -> Result<Vec<u8>, DomainError> {
        match Message::from_vec(payload) {
            Ok(request) => {
                Self::build_error_response(&request, request.queries().first(), ResponseCode::ServFail)
            }
            Err(_) => Self::build_header_only(payload, ResponseCode::ServFail),
        }
    }

    /// Header-only reply built from whatever id and flags can be read from a
    /// datagram that failed to parse. `None` when not even the id is there.
    pub fn build_header_only_response(datagram: &[u8], rcode: ResponseCode) -> Option<Vec<u8>> {
        Self::build_header_only(datagram, rcode).ok()
    }

    fn build_header_only(datagram: &[u8], rcode: ResponseCode) -> Result<Vec<u8>, DomainError> {
        if datagram.len() < 2 {
            return Err(DomainError::InvalidDnsMessage(format!(
                "datagram too short for a transaction id: {} bytes",
                datagram.len()
            )));
        }

        // QR set; opcode and RD copied from the request flags when present.
        let request_flags = datagram.get(2).copied().unwrap_or(0);
        let mut header = [0u8; DNS_HEADER_LEN];
        header[0] = datagram[0];
        header[1] = datagram[1];
        header[2] = 0x80 | (request_flags & 0x79);
        header[3] = (u16::from(rcode) & 0x0f) as u8;
        Ok(header.to_vec())
    }

    fn reply_envelope(request: &Message, query: &Query) -> Message {
        let mut message =
            Self::bare_envelope(request.id(), request.op_code(), request.recursion_desired());
        message.add_query(query.clone());
        message
    }

    fn bare_envelope(id: u16, op_code: OpCode, recursion_desired: bool) -> Message {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Response)
            .set_op_code(op_code)
            .set_recursion_desired(recursion_desired)
            .set_recursion_available(false);
        message
    }

    fn to_hickory_record(owner: Name, record: &DnsRecord) -> Result<Record, DomainError> {
        let rdata = match &record.data {
            RecordData::A(ip) => RData::A(A(*ip)),
            RecordData::Mx {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
            RecordData::Ns(host) => RData::NS(NS(parse_name(host)?)),
            RecordData::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => RData::SOA(SOA::new(
                parse_name(mname)?,
                parse_name(rname)?,
                *serial,
                clamp_i32(*refresh),
                clamp_i32(*retry),
                clamp_i32(*expire),
                *minimum,
            )),
            RecordData::Ptr(host) => RData::PTR(PTR(parse_name(host)?)),
        };

        let mut hickory_record = Record::from_rdata(owner, record.ttl, rdata);
        hickory_record.set_dns_class(DNSClass::from(record.class));
        Ok(hickory_record)
    }

    /// Serialize a Message to wire format bytes. Names are compressed.
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}

fn clamp_i32(value: u32) -> i32 {
    value.min(i32::MAX as u32) as i32
}

use localdns_domain::{DnsAnswer, DnsQuery, DnsRecord, RecordData, RecordType, ZoneConfig, CLASS_IN};
use std::sync::Arc;
use tracing::warn;

const MX_PRIMARY_PREFERENCE: u16 = 10;
const MX_SECONDARY_PREFERENCE: u16 = 15;

/// Builds authoritative answers for the local zone without any I/O.
pub struct AnswerSynthesizer {
    zone: Arc<ZoneConfig>,
}

impl AnswerSynthesizer {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        Self { zone }
    }

    pub fn synthesize(&self, query: &DnsQuery) -> DnsAnswer {
        self.synthesize_at(query, current_serial())
    }

    /// Same as [`synthesize`](Self::synthesize) with an explicit SOA serial.
    pub fn synthesize_at(&self, query: &DnsQuery, serial: u32) -> DnsAnswer {
        let zone = &*self.zone;
        let name = Arc::clone(&query.domain);
        let ttl = zone.ttl;

        let records = match query.record_type {
            RecordType::A | RecordType::AAAA | RecordType::ANY | RecordType::HTTPS => {
                vec![DnsRecord::new(
                    name,
                    query.class,
                    ttl,
                    RecordData::A(zone.listen_address),
                )]
            }
            RecordType::MX => vec![
                DnsRecord::new(
                    Arc::clone(&name),
                    CLASS_IN,
                    ttl,
                    RecordData::Mx {
                        preference: MX_PRIMARY_PREFERENCE,
                        exchange: zone.host("mail1").into(),
                    },
                ),
                DnsRecord::new(
                    name,
                    CLASS_IN,
                    ttl,
                    RecordData::Mx {
                        preference: MX_SECONDARY_PREFERENCE,
                        exchange: zone.host("mail2").into(),
                    },
                ),
            ],
            RecordType::NS => vec![
                DnsRecord::new(
                    Arc::clone(&name),
                    CLASS_IN,
                    ttl,
                    RecordData::Ns(zone.host("ns1").into()),
                ),
                DnsRecord::new(name, CLASS_IN, ttl, RecordData::Ns(zone.host("ns2").into())),
            ],
            RecordType::SOA => vec![DnsRecord::new(
                name,
                CLASS_IN,
                ttl,
                RecordData::Soa {
                    mname: zone.host("ns1").into(),
                    rname: zone.soa_mailbox().into(),
                    serial,
                    refresh: ttl,
                    retry: ttl,
                    expire: ttl,
                    minimum: ttl,
                },
            )],
            RecordType::PTR => vec![DnsRecord::new(
                name,
                CLASS_IN,
                ttl,
                RecordData::Ptr(zone.ptr_target().into()),
            )],
            RecordType::Other(code) => {
                warn!(
                    domain = %query.domain,
                    record_type = code,
                    "Unsupported record type in local zone"
                );
                return DnsAnswer::unsupported();
            }
        };

        DnsAnswer::authoritative(records)
    }

    pub fn zone(&self) -> &ZoneConfig {
        &self.zone
    }
}

fn current_serial() -> u32 {
    chrono::Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32
}

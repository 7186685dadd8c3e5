#![allow(dead_code)]

pub mod mock_forwarder;

pub use mock_forwarder::MockDnsForwarder;

use localdns_domain::{DnsQuery, DnsRequest, RecordType, ZoneConfig};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

pub const LISTEN_ADDRESS: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 5);
pub const CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 77));

pub fn test_zone() -> Arc<ZoneConfig> {
    Arc::new(ZoneConfig::new(LISTEN_ADDRESS, "example.org", "10.0.0", 60))
}

pub fn query(name: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(name, record_type)
}

pub fn request(name: &str, record_type: RecordType) -> DnsRequest {
    DnsRequest::new(query(name, record_type), CLIENT_IP)
}

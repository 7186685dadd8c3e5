use super::DnsQuery;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub query: DnsQuery,
    pub client_ip: IpAddr,
}

impl DnsRequest {
    pub fn new(query: DnsQuery, client_ip: IpAddr) -> Self {
        Self { query, client_ip }
    }
}

use localdns_domain::DomainError;
use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};
use std::net::Ipv4Addr;
use tracing::debug;

/// First non-loopback IPv4 address on the host, in interface order.
pub fn detect_listen_address() -> Result<Ipv4Addr, DomainError> {
    let interfaces = NetworkInterface::show()
        .map_err(|e| DomainError::NoListenAddress(format!("failed to list interfaces: {}", e)))?;

    debug!(count = interfaces.len(), "Found network interfaces");

    let candidates = interfaces.iter().flat_map(|iface| {
        iface.addr.iter().filter_map(|addr| match addr {
            Addr::V4(v4) => Some(v4.ip),
            Addr::V6(_) => None,
        })
    });

    first_usable_ipv4(candidates)
        .ok_or_else(|| DomainError::NoListenAddress("no non-loopback IPv4 address".to_string()))
}

pub fn first_usable_ipv4(addresses: impl IntoIterator<Item = Ipv4Addr>) -> Option<Ipv4Addr> {
    addresses
        .into_iter()
        .find(|ip| !ip.is_loopback() && !ip.is_unspecified())
}

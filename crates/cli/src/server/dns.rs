use anyhow::Context;
use localdns_infrastructure::dns::server::DnsServerHandler;
use localdns_infrastructure::dns::udp_server::{bind_udp_socket, serve};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub async fn start_dns_server(bind_addr: SocketAddr, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket = bind_udp_socket(bind_addr)
        .with_context(|| format!("Failed to bind DNS listener on {}", bind_addr))?;

    info!(bind_address = %bind_addr, "Starting DNS server (UDP)");

    serve(Arc::new(socket), Arc::new(handler))
        .await
        .context("DNS listener stopped")
}

pub mod forwarding;
pub mod server;
pub mod transport;
pub mod udp_server;

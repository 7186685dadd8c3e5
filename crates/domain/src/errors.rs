use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid DNS response from {server}: {reason}")]
    InvalidDnsResponse { server: String, reason: String },

    #[error("DNS response ID mismatch from {server}: expected {expected:#06x}, got {received:#06x}")]
    ResponseIdMismatch {
        server: String,
        expected: u16,
        received: u16,
    },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport I/O error with {server}: {message}")]
    TransportIo { server: String, message: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,

    #[error("No usable IPv4 interface: {0}")]
    NoListenAddress(String),
}

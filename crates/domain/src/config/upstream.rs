use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Upstream resolvers, tried strictly in the listed order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn resolvers(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.servers.iter().map(|s| parse_resolver(s)).collect()
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Parses a comma separated list such as `"8.8.4.4,8.8.8.8"`.
    pub fn servers_from_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

/// Accepts `IP`, `IP:PORT` or `[IPv6]:PORT`. A bare IP gets port 53.
pub fn parse_resolver(server: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = server.trim();
    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }
    trimmed
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::InvalidUpstream(server.to_string()))
}

fn default_servers() -> Vec<String> {
    vec!["8.8.4.4".to_string(), "8.8.8.8".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    2000
}

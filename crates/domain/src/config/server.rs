use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::errors::ConfigError;

pub const LOOKUP_SENTINEL: &str = "lookup";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// IPv4 address to bind and advertise, or `"lookup"` to use the first
    /// non-loopback interface address.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default)]
    pub question_policy: QuestionPolicy,
}

impl ServerConfig {
    pub fn listen_address(&self) -> Result<ListenAddress, ConfigError> {
        self.listen_address.parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            dns_port: default_dns_port(),
            question_policy: QuestionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenAddress {
    Lookup,
    Fixed(Ipv4Addr),
}

impl FromStr for ListenAddress {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(LOOKUP_SENTINEL) {
            return Ok(ListenAddress::Lookup);
        }
        trimmed
            .parse::<Ipv4Addr>()
            .map(ListenAddress::Fixed)
            .map_err(|_| ConfigError::InvalidListenAddress(s.to_string()))
    }
}

/// How many questions of a multi-question request get a reply.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionPolicy {
    /// One reply per question.
    #[default]
    All,

    /// Only the first question is answered; the rest are ignored.
    First,
}

impl QuestionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::First => "first",
        }
    }
}

impl fmt::Display for QuestionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "first" => Ok(Self::First),
            _ => Err(format!("Unknown question policy: {} (expected all|first)", s)),
        }
    }
}

fn default_listen_address() -> String {
    LOOKUP_SENTINEL.to_string()
}

fn default_dns_port() -> u16 {
    53
}

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// `[zone]` section as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneSettings {
    #[serde(default = "default_local_domain")]
    pub local_domain: String,

    /// Dotted prefix of the reverse zone we answer for, e.g. `"192.168.0"`.
    #[serde(default = "default_local_network")]
    pub local_network: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_soa_admin")]
    pub soa_admin: String,

    #[serde(default = "default_ptr_hostname")]
    pub ptr_hostname: String,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            local_domain: default_local_domain(),
            local_network: default_local_network(),
            ttl: default_ttl(),
            soa_admin: default_soa_admin(),
            ptr_hostname: default_ptr_hostname(),
        }
    }
}

/// Frozen view of the authoritative zone, built once the listen address is
/// known. Shared read-only by the classifier and the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    pub listen_address: Ipv4Addr,
    /// Lowercase, fully qualified (`"example.org."`).
    pub local_domain: Arc<str>,
    pub local_network: Arc<str>,
    pub ttl: u32,
    pub soa_admin: Arc<str>,
    pub ptr_hostname: Arc<str>,
}

impl ZoneConfig {
    pub fn new(listen_address: Ipv4Addr, local_domain: &str, local_network: &str, ttl: u32) -> Self {
        Self {
            listen_address,
            local_domain: normalize_domain(local_domain).into(),
            local_network: local_network.trim().into(),
            ttl,
            soa_admin: default_soa_admin().into(),
            ptr_hostname: default_ptr_hostname().into(),
        }
    }

    pub fn from_settings(listen_address: Ipv4Addr, settings: &ZoneSettings) -> Self {
        Self::new(
            listen_address,
            &settings.local_domain,
            &settings.local_network,
            settings.ttl,
        )
        .with_soa_admin(&settings.soa_admin)
        .with_ptr_hostname(&settings.ptr_hostname)
    }

    pub fn with_soa_admin(mut self, admin: &str) -> Self {
        self.soa_admin = admin.trim().trim_end_matches('.').into();
        self
    }

    pub fn with_ptr_hostname(mut self, hostname: &str) -> Self {
        self.ptr_hostname = hostname.trim().trim_end_matches('.').into();
        self
    }

    /// `label` placed directly under the local domain: `host("ns1")` is
    /// `"ns1.example.org."`.
    pub fn host(&self, label: &str) -> String {
        format!("{}.{}", label, self.local_domain)
    }

    pub fn ptr_target(&self) -> String {
        self.host(&self.ptr_hostname)
    }

    pub fn soa_mailbox(&self) -> String {
        self.host(&self.soa_admin)
    }
}

/// Lowercases and makes a domain fully qualified. A leading dot is dropped,
/// so `".Example.Org"` becomes `"example.org."`.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim().trim_start_matches('.').to_ascii_lowercase();
    if trimmed.ends_with('.') {
        trimmed
    } else {
        format!("{}.", trimmed)
    }
}

fn default_local_domain() -> String {
    "localdns.co.za".to_string()
}

fn default_local_network() -> String {
    "192.168.0".to_string()
}

fn default_ttl() -> u32 {
    60
}

fn default_soa_admin() -> String {
    "hostmaster".to_string()
}

fn default_ptr_hostname() -> String {
    "swan".to_string()
}

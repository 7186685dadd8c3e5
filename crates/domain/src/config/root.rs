use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::server::{QuestionPolicy, ServerConfig};
use super::upstream::UpstreamConfig;
use super::zone::{normalize_domain, ZoneConfig, ZoneSettings};

const LOCAL_CONFIG_PATH: &str = "localdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/localdns/config.toml";

/// Main configuration structure for localdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (address, port, question policy)
    #[serde(default)]
    pub server: ServerConfig,

    /// Authoritative zone configuration
    #[serde(default)]
    pub zone: ZoneSettings,

    /// Upstream resolvers for forwarded queries
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. localdns.toml in current directory
    /// 3. /etc/localdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize();
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(ip) = overrides.dns_ip {
            self.server.listen_address = ip;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(policy) = overrides.question_policy {
            self.server.question_policy = policy;
        }
        if let Some(list) = overrides.nameservers {
            self.upstream.servers = UpstreamConfig::servers_from_list(&list);
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.upstream.query_timeout_ms = timeout;
        }
        if let Some(network) = overrides.network {
            self.zone.local_network = network;
        }
        if let Some(ttl) = overrides.ttl {
            self.zone.ttl = ttl;
        }
        if let Some(domain) = overrides.local_domain {
            self.zone.local_domain = domain;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    fn normalize(&mut self) {
        self.zone.local_domain = normalize_domain(&self.zone.local_domain);
        self.zone.local_network = self.zone.local_network.trim().to_string();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.listen_address()?;

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }
        self.upstream.resolvers()?;

        if self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream query timeout cannot be 0".to_string(),
            ));
        }

        if normalize_domain(&self.zone.local_domain) == "." {
            return Err(ConfigError::Validation(
                "Local domain cannot be empty".to_string(),
            ));
        }

        if self.zone.local_network.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Local network prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn zone_config(&self, listen_address: Ipv4Addr) -> ZoneConfig {
        ZoneConfig::from_settings(listen_address, &self.zone)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_ip: Option<String>,
    pub dns_port: Option<u16>,
    pub question_policy: Option<QuestionPolicy>,
    pub nameservers: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub network: Option<String>,
    pub ttl: Option<u32>,
    pub local_domain: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

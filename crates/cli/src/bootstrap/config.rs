use localdns_domain::{CliOverrides, Config, ListenAddress};
use localdns_infrastructure::system::detect_listen_address;
use std::net::Ipv4Addr;
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Fixed address from the config, or the first non-loopback IPv4 address
/// of the host when set to `"lookup"`.
pub fn resolve_listen_address(config: &Config) -> anyhow::Result<Ipv4Addr> {
    match config.server.listen_address()? {
        ListenAddress::Fixed(ip) => Ok(ip),
        ListenAddress::Lookup => {
            let ip = detect_listen_address()?;
            info!(address = %ip, "Listen address detected");
            Ok(ip)
        }
    }
}

pub fn log_config_summary(config_path: Option<&str>, config: &Config, listen_address: Ipv4Addr) {
    let config_file = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "default".to_string());

    info!(
        config_file = %config_file,
        listen_address = %listen_address,
        dns_port = config.server.dns_port,
        local_domain = %config.zone.local_domain,
        local_network = %config.zone.local_network,
        ttl = config.zone.ttl,
        upstream = ?config.upstream.servers,
        query_timeout_ms = config.upstream.query_timeout_ms,
        question_policy = %config.server.question_policy,
        "Configuration loaded"
    );
}

use clap::Parser;
use localdns_domain::{CliOverrides, LogFormat, QuestionPolicy};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "localdns")]
#[command(version)]
#[command(about = "Authoritative answers for a local zone, forwarding for everything else")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// IPv4 address to listen on and advertise, or "lookup"
    #[arg(long, value_name = "IP")]
    dns_ip: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Comma separated upstream resolvers, tried in order
    #[arg(long, value_name = "LIST")]
    nameservers: Option<String>,

    /// Per-resolver timeout in milliseconds
    #[arg(long, value_name = "MS")]
    query_timeout_ms: Option<u64>,

    /// Dotted prefix of the local network, e.g. 192.168.0
    #[arg(long)]
    network: Option<String>,

    /// TTL of synthesized records
    #[arg(long)]
    ttl: Option<u32>,

    /// Domain answered authoritatively
    #[arg(long)]
    local_domain: Option<String>,

    /// Questions answered per request (all, first)
    #[arg(long)]
    question_policy: Option<QuestionPolicy>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_ip: self.dns_ip.clone(),
            dns_port: self.dns_port,
            question_policy: self.question_policy,
            nameservers: self.nameservers.clone(),
            query_timeout_ms: self.query_timeout_ms,
            network: self.network.clone(),
            ttl: self.ttl,
            local_domain: self.local_domain.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging);

    info!("Starting localdns v{}", env!("CARGO_PKG_VERSION"));

    let listen_address = bootstrap::resolve_listen_address(&config)?;
    bootstrap::log_config_summary(cli.config.as_deref(), &config, listen_address);

    let dns_services = di::DnsServices::new(&config, listen_address)?;
    info!(
        local_domain = %dns_services.zone.local_domain,
        address = %dns_services.zone.listen_address,
        "Local zone ready"
    );

    server::install_signal_handlers()?;

    let bind_addr = SocketAddr::from((listen_address, config.server.dns_port));
    server::start_dns_server(bind_addr, dns_services.handler()).await
}

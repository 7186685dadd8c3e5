pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;
pub mod zone;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::{ListenAddress, QuestionPolicy, ServerConfig};
pub use upstream::{parse_resolver, UpstreamConfig, DEFAULT_DNS_PORT};
pub use zone::{normalize_domain, ZoneConfig, ZoneSettings};

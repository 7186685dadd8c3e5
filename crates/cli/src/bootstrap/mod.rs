pub mod config;
pub mod logging;

pub use config::{load_config, log_config_summary, resolve_listen_address};
pub use logging::init_logging;

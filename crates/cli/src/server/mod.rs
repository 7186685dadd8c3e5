pub mod dns;
pub mod signals;

pub use dns::start_dns_server;
pub use signals::install_signal_handlers;

pub mod interface;

pub use interface::{detect_listen_address, first_usable_ipv4};

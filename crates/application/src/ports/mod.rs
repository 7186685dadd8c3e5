mod dns_forwarder;

pub use dns_forwarder::{DnsForwarder, ForwardedReply};

pub use localdns_domain::DnsQuery;

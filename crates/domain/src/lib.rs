//! localdns domain layer
pub mod classification;
pub mod config;
pub mod dns_answer;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod reverse_name;

pub use classification::Classification;
pub use config::{
    CliOverrides, Config, ConfigError, ListenAddress, LogFormat, QuestionPolicy, ZoneConfig,
};
pub use dns_answer::{DnsAnswer, ResponseCode};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordData, RecordType, CLASS_IN};
pub use dns_request::DnsRequest;
pub use errors::DomainError;

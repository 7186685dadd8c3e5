mod record;
mod record_type;

pub use record::{DnsRecord, RecordData};
pub use record_type::RecordType;

/// The Internet class, used for every record the zone synthesizes.
pub const CLASS_IN: u16 = 1;

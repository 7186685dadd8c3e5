use localdns_domain::reverse_name::embedded_address;
use localdns_domain::{Classification, DnsQuery, RecordType, ZoneConfig};
use std::sync::Arc;

/// Decides whether a question is answered locally or forwarded.
pub struct ZoneClassifier {
    zone: Arc<ZoneConfig>,
}

impl ZoneClassifier {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        Self { zone }
    }

    pub fn classify(&self, query: &DnsQuery) -> Classification {
        if query.record_type.is_ptr() {
            if let Some(address) = embedded_address(&query.domain) {
                return if address.starts_with(&*self.zone.local_network) {
                    Classification::AuthoritativeReverse
                } else {
                    Classification::Forward
                };
            }
        }

        if self.in_local_domain(&query.domain) {
            Classification::Authoritative
        } else {
            Classification::Forward
        }
    }

    /// Plain suffix match, ignoring ASCII case. No label boundary is
    /// required, so `foolocal.lan.` matches `local.lan.`.
    fn in_local_domain(&self, name: &str) -> bool {
        let suffix = &*self.zone.local_domain;
        let Some(start) = name.len().checked_sub(suffix.len()) else {
            return false;
        };
        name.is_char_boundary(start) && name[start..].eq_ignore_ascii_case(suffix)
    }
}

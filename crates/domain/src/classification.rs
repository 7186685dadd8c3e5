use std::fmt;

/// Where a question is answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Name falls under the local domain.
    Authoritative,
    /// PTR lookup for an address inside the local network.
    AuthoritativeReverse,
    Forward,
}

impl Classification {
    pub fn is_local(&self) -> bool {
        !matches!(self, Classification::Forward)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Authoritative => "authoritative",
            Classification::AuthoritativeReverse => "authoritative_reverse",
            Classification::Forward => "forward",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

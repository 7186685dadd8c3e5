//! IPv4 reverse-lookup names (`d.c.b.a.in-addr.arpa.`).

pub const REVERSE_SUFFIX: &str = ".in-addr.arpa.";

/// Returns the dotted address embedded in a reverse-lookup name, with the
/// labels put back in forward order.
///
/// No validation is done on the labels: `"x.y.in-addr.arpa."` yields
/// `"y.x"`. Names outside `in-addr.arpa.` yield `None`.
pub fn embedded_address(name: &str) -> Option<String> {
    let stem_len = name.len().checked_sub(REVERSE_SUFFIX.len())?;
    if !name.is_char_boundary(stem_len)
        || !name[stem_len..].eq_ignore_ascii_case(REVERSE_SUFFIX)
    {
        return None;
    }
    Some(reverse_labels(&name[..stem_len]))
}

pub fn reverse_labels(dotted: &str) -> String {
    dotted.rsplit('.').collect::<Vec<_>>().join(".")
}

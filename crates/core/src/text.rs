//! String helpers.

/// Left-pads `s` with `pad` until it is `len` characters long.
///
/// Strings already longer than `len` are returned unchanged, never truncated.
/// `pad` is expected to be a single character; longer pads are repeated as-is.
#[must_use]
pub fn left_pad(s: &str, pad: &str, len: usize) -> String {
    let current = s.chars().count();
    if len < current {
        return s.to_owned();
    }
    let mut out = pad.repeat(len.saturating_sub(current));
    out.push_str(s);
    out
}

/// `true` only for `"true"`, ignoring surrounding whitespace and case.
#[must_use]
pub fn parse_boolean(val: Option<&str>) -> bool {
    val.is_some_and(|v| v.trim().to_lowercase() == "true")
}

// templates/text.rs

pub const HEADING_CHARS: usize = 60;
pub const DESCRIPTION_CHARS: usize = 300;

/// First `max` characters of `s` (not bytes; Polish text is multi-byte).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    split_at_chars(s, max).0
}

/// Split after `max` characters. The second half is `None` when nothing
/// was cut off.
pub fn split_at_chars(s: &str, max: usize) -> (&str, Option<&str>) {
    match s.char_indices().nth(max) {
        Some((idx, _)) => (&s[..idx], Some(&s[idx..])),
        None => (s, None),
    }
}

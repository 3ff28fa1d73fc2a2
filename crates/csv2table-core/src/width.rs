//! Cell width measurement

use unicode_width::UnicodeWidthStr;

/// Count the display width of a string.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pad a string with trailing spaces up to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut padded = String::with_capacity(s.len() + fill);
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', fill));
    padded
}

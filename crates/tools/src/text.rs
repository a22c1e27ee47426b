//! Char-offset helpers for slicing UTF-8 text by user-facing positions.
//!
//! Offsets handed in by callers count Unicode scalar values; everything returned
//! here is a byte index that is guaranteed to sit on a char boundary.

/// Byte index of the char at `char_offset`, or `text.len()` when the offset is at
/// or past the end.
pub fn byte_index_of_char(text: &str, char_offset: usize) -> usize {
    if char_offset >= text.len() {
        // Every char is at least one byte.
        return text.len();
    }
    if text.is_ascii() {
        return char_offset;
    }
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Byte index of the last whitespace char whose char index is `<= char_offset`.
///
/// Offsets past the end search the whole text.
pub fn rfind_whitespace_at_or_before(text: &str, char_offset: usize) -> Option<usize> {
    let start = byte_index_of_char(text, char_offset);
    // The char *at* the offset is part of the window.
    let end = text[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    text[..end].rfind(char::is_whitespace)
}

/// Number of chars in `text`; shorthand for callers that report offsets back.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

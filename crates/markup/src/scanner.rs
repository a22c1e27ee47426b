//! Tag scanner for raw markup fragments.
//!
//! Recognized shape (ASCII only): `<` then an optional `/`, then a name of one or more
//! `[A-Za-z0-9]`, then anything up to the next `>`.
//!
//! This is not an HTML tokenizer. Comments, doctypes and processing
//! instructions never match because their first byte after `<` is not alphanumeric.
//! Attribute text is skipped wholesale, so a quoted `>` ends the tag early. A `<` that
//! does not start a match is treated as text and scanning resumes right after it.
//!
//! Known limitations:
//! - `<my-element>` scans as a tag named `my`; the rest of the name is attribute text.
//! - A `<name` with no `>` anywhere after it is not a tag.
use crate::types::{TagEvent, TagKind};
use memchr::memchr;

/// Scans `input` for tag events in document order.
pub fn scan_tags(input: &str) -> Vec<TagEvent<'_>> {
    TagScanner::new(input).collect()
}

/// Lazy left-to-right tag scanner; see [`scan_tags`] for the eager form.
#[derive(Clone, Debug)]
pub struct TagScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset where the next match attempt starts.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = TagEvent<'a>;

    fn next(&mut self) -> Option<TagEvent<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();
        let len = bytes.len();
        // Slice endpoints are only ever taken at ASCII bytes ('<', '/', '>' or the end of
        // an ASCII name run), so they stay on UTF-8 char boundaries.
        while self.pos < len {
            let Some(rel) = memchr(b'<', &bytes[self.pos..]) else {
                self.pos = len;
                return None;
            };
            let start = self.pos + rel;
            let mut name_start = start + 1;
            let kind = if bytes.get(name_start) == Some(&b'/') {
                name_start += 1;
                TagKind::Close
            } else {
                TagKind::Open
            };
            let mut name_end = name_start;
            while name_end < len && bytes[name_end].is_ascii_alphanumeric() {
                name_end += 1;
            }
            if name_end == name_start {
                self.pos = start + 1;
                continue;
            }
            // Without a '>' after this point no later '<' can complete a tag either.
            let Some(rel_gt) = memchr(b'>', &bytes[name_end..]) else {
                self.pos = len;
                return None;
            };
            let end = name_end + rel_gt + 1;
            debug_assert!(input.is_char_boundary(name_start));
            debug_assert!(input.is_char_boundary(name_end));
            self.pos = end;
            return Some(TagEvent {
                name: &input[name_start..name_end],
                kind,
                start,
                end,
            });
        }
        None
    }
}

impl std::iter::FusedIterator for TagScanner<'_> {}

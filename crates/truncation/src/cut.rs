//! Choosing the cut point and deriving the truncated markup.
//!
//! The cut lands on the last whitespace char at or before the split offset and the
//! whitespace itself is dropped. Whitespace inside a tag (between attributes) is skipped:
//! when the prefix holds an unterminated `<name...` run after its last `>`, the search
//! restarts before that run. Attribute values may contain `<` themselves, so the first
//! such run counts, not the last `<`. Tag closing is left entirely to the balancer.
use markup::{BalanceOptions, close_unclosed_tags};
use tools::text::rfind_whitespace_at_or_before;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TruncationOptions {
    pub balance: BalanceOptions,
}

/// Byte index to cut `markup` at, or `None` when no usable whitespace exists at or
/// before `split_offset` (counted in chars).
pub fn safe_cut_index(markup: &str, split_offset: usize) -> Option<usize> {
    let mut cut = rfind_whitespace_at_or_before(markup, split_offset)?;
    while let Some(lt) = dangling_tag_start(&markup[..cut]) {
        cut = markup[..lt].rfind(char::is_whitespace)?;
    }
    Some(cut)
}

// Start of the first `<name` / `</name` run after the last '>'. The scanner stops there
// and would later read it together with the appended closers as one tag.
fn dangling_tag_start(prefix: &str) -> Option<usize> {
    let from = prefix.rfind('>').map_or(0, |gt| gt + 1);
    let tail = &prefix[from..];
    tail.match_indices('<').find_map(|(lt, _)| {
        let rest = &tail[lt + 1..];
        let name = rest.strip_prefix('/').unwrap_or(rest);
        name.as_bytes()
            .first()
            .is_some_and(u8::is_ascii_alphanumeric)
            .then_some(from + lt)
    })
}

/// Truncated, self-balanced view of `markup`.
///
/// Degenerate cuts (no whitespace early enough) yield an empty string.
pub fn truncate_markup(markup: &str, split_offset: usize, options: TruncationOptions) -> String {
    let cut = safe_cut_index(markup, split_offset).unwrap_or_else(|| {
        log::debug!(
            target: "truncation.cut",
            "no whitespace at or before offset {split_offset}; truncating to empty"
        );
        0
    });
    close_unclosed_tags(&markup[..cut], options.balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<p>Hello <b>world, this is bold</b> and more</p>";

    fn truncate(markup: &str, offset: usize) -> String {
        truncate_markup(markup, offset, TruncationOptions::default())
    }

    #[test]
    fn cut_lands_on_last_whitespace_at_or_before_offset() {
        assert_eq!(safe_cut_index(SAMPLE, 15), Some(8));
        assert_eq!(safe_cut_index(SAMPLE, 18), Some(18));
        assert_eq!(safe_cut_index(SAMPLE, 22), Some(18));
    }

    #[test]
    fn sample_truncations() {
        assert_eq!(truncate(SAMPLE, 15), "<p>Hello</p>");
        assert_eq!(truncate(SAMPLE, 19), "<p>Hello <b>world,</b></p>");
        assert_eq!(truncate(SAMPLE, 36), "<p>Hello <b>world, this is bold</b></p>");
    }

    #[test]
    fn offset_past_end_cuts_at_last_whitespace() {
        assert_eq!(truncate(SAMPLE, 1_000), "<p>Hello <b>world, this is bold</b> and</p>");
    }

    #[test]
    fn no_whitespace_yields_empty_fragment() {
        assert_eq!(safe_cut_index("<p>Supercalifragilistic</p>", 10), None);
        assert_eq!(truncate("<p>Supercalifragilistic</p>", 10), "");
        assert_eq!(truncate("word more", 0), "");
        assert_eq!(truncate("", 0), "");
        assert_eq!(truncate("", 100), "");
    }

    #[test]
    fn leading_whitespace_at_offset_zero_cuts_to_empty() {
        assert_eq!(safe_cut_index(" lead", 0), Some(0));
        assert_eq!(truncate(" lead", 0), "");
    }

    #[test]
    fn whitespace_between_attributes_is_skipped() {
        let markup = r#"<p>Read <a href="/x" class="link">the docs</a> now</p>"#;
        // Offset 20 falls on the space before `class`.
        assert_eq!(safe_cut_index(markup, 20), Some(7));
        assert_eq!(truncate(markup, 20), "<p>Read</p>");
        // A cut after the tag is unaffected.
        assert_eq!(truncate(markup, 40), r#"<p>Read <a href="/x" class="link">the</a></p>"#);
    }

    #[test]
    fn nested_brackets_inside_attribute_are_skipped_too() {
        let markup = r#"<p>x <a title="1 <b 2" id=y>z</a></p>"#;
        assert_eq!(truncate(markup, 22), "<p>x</p>");
    }

    #[test]
    fn bracket_in_attribute_value_does_not_hide_open_tag() {
        let markup = r#"<p>x <a title="1 < 2" id=y>z</a> more</p>"#;
        // Offset 21 is the space after the closing quote of `title`.
        assert_eq!(safe_cut_index(markup, 21), Some(4));
        let out = truncate(markup, 21);
        assert_eq!(out, "<p>x</p>");
        assert!(markup::is_balanced(&out));

        let markup = r#"<p>one <a data-q="<b x" href=y>two</a></p>"#;
        assert_eq!(truncate(markup, 20), "<p>one</p>");
    }

    #[test]
    fn text_angle_bracket_does_not_move_cut() {
        let markup = "<p>1 < 2 is true and more</p>";
        assert_eq!(truncate(markup, 9), "<p>1 < 2</p>");
    }

    #[test]
    fn multibyte_offsets_count_chars() {
        let markup = "<p>café crème brûlée</p>";
        // 'c' of "crème" is char 8; the space before it is char 7.
        assert_eq!(truncate(markup, 8), "<p>café</p>");
        assert_eq!(truncate(markup, 13), "<p>café crème</p>");
    }

    #[test]
    fn case_insensitive_balance_is_configurable() {
        let markup = "<P>one</p> <B>two three</B>";
        assert_eq!(truncate(markup, 17), "<P>one</p> <B>two</B></P>");
        let options = TruncationOptions {
            balance: BalanceOptions::ignore_ascii_case(),
        };
        assert_eq!(truncate_markup(markup, 17, options), "<P>one</p> <B>two</B>");
    }

    #[test]
    fn truncated_output_is_self_balanced() {
        for offset in 0..SAMPLE.len() + 2 {
            let out = truncate(SAMPLE, offset);
            assert!(markup::is_balanced(&out), "offset {offset}: {out}");
        }
    }
}

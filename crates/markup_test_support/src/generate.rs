//! Random well-formed markup for property runs.
//!
//! Text never contains `<` and attribute values never contain `>`, so every tag ends
//! where the scanner expects. Attribute values may contain `<`, including `<name` runs
//! that must not be taken for tags.
use crate::rng::LcgRng;

const TAGS: &[&str] = &[
    "p", "b", "i", "em", "strong", "div", "span", "a", "ul", "li", "h2", "DIV", "blockquote",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "café", "naïve", "😀", "x", "1", "&amp;", "a>b",
];
const ATTRIBUTES: &[&str] = &[
    r#" class="note""#,
    r#" href="/read more""#,
    " title='a b c'",
    " data-x=1",
    r#" style="color: red; margin: 0 auto""#,
    r#" title="1 < 2""#,
    r#" data-q="<b x""#,
];

#[derive(Clone, Copy, Debug)]
pub struct MarkupShape {
    pub max_depth: usize,
    pub max_children: usize,
    pub attribute_percent: u32,
}

impl Default for MarkupShape {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_children: 4,
            attribute_percent: 30,
        }
    }
}

pub fn well_formed_markup(rng: &mut LcgRng, shape: MarkupShape) -> String {
    let mut out = String::new();
    let roots = rng.gen_range_usize(1, shape.max_children + 1);
    for _ in 0..roots {
        push_node(rng, shape, 0, &mut out);
    }
    out
}

fn push_node(rng: &mut LcgRng, shape: MarkupShape, depth: usize, out: &mut String) {
    if depth >= shape.max_depth || rng.chance(35) {
        push_text(rng, out);
        return;
    }
    let tag = *rng.pick(TAGS);
    out.push('<');
    out.push_str(tag);
    if rng.chance(shape.attribute_percent) {
        out.push_str(*rng.pick(ATTRIBUTES));
    }
    out.push('>');
    let children = rng.gen_range_usize(0, shape.max_children + 1);
    for _ in 0..children {
        push_node(rng, shape, depth + 1, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_text(rng: &mut LcgRng, out: &mut String) {
    if rng.chance(50) {
        out.push(' ');
    }
    let words = rng.gen_range_usize(1, 6);
    for i in 0..words {
        if i > 0 {
            out.push(if rng.chance(10) { '\n' } else { ' ' });
        }
        out.push_str(*rng.pick(WORDS));
    }
    if rng.chance(50) {
        out.push(' ');
    }
}

/// Byte offsets (char boundaries, `0..=len`) where a cut does not split a `<...>` run.
pub fn cut_points_outside_tags(markup: &str) -> Vec<usize> {
    let mut points = Vec::new();
    let mut in_tag = false;
    for (idx, ch) in markup.char_indices() {
        if !in_tag {
            points.push(idx);
        }
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ => {}
        }
    }
    if !in_tag {
        points.push(markup.len());
    }
    points
}

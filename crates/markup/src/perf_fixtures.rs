pub const BLOCK_TEMPLATE: &str =
    r#"<div class="card"><p>Some <b>bold</b> and <a href="/x y">linked</a> text.</p></div>"#;

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}

/// Nested openers with no closers; every tag ends up in the balancer's output.
pub fn make_open_chain(depth: usize) -> String {
    let mut html = String::with_capacity(depth * 8);
    for i in 0..depth {
        html.push_str(if i % 2 == 0 { "<div>x " } else { "<span>y " });
    }
    html
}

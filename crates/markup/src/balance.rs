//! Closing-tag synthesis for truncated markup.
//!
//! The balancer walks tag events from last to first with a stack of closers whose
//! openers have not been seen yet. An opener whose name equals the stack top consumes
//! it; any other opener is unclosed and gets a closer emitted. Because the walk is
//! backwards, closers come out innermost first, which is exactly the order they must be
//! appended in.
//!
//! Only missing closers are reported. A stray closer stays on the stack for the rest of
//! the walk and never shows up in the output.
use crate::scanner::scan_tags;
use crate::types::{BalanceOptions, TagEvent, TagKind};

/// Closing tags (`"</name>"`) needed to close every tag left open in `markup`, in
/// append order.
pub fn find_unclosed_tags(markup: &str) -> Vec<String> {
    find_unclosed_tags_with(markup, BalanceOptions::default())
}

pub fn find_unclosed_tags_with(markup: &str, options: BalanceOptions) -> Vec<String> {
    let events = scan_tags(markup);
    unclosed_tags(&events, options)
}

/// Balancing pass over events that were already scanned, in document order.
pub fn unclosed_tags(events: &[TagEvent<'_>], options: BalanceOptions) -> Vec<String> {
    let mut unclosed = Vec::new();
    let mut pending_closers: Vec<&str> = Vec::new();
    for event in events.iter().rev() {
        match event.kind {
            TagKind::Close => pending_closers.push(event.name),
            TagKind::Open => {
                let matched = pending_closers
                    .last()
                    .is_some_and(|top| options.tag_name_matching.matches(top, event.name));
                if matched {
                    pending_closers.pop();
                } else {
                    log::trace!(
                        target: "markup.balance",
                        "unclosed <{}> at byte {}",
                        event.name,
                        event.start
                    );
                    unclosed.push(event.closer());
                }
            }
        }
    }
    if !pending_closers.is_empty() {
        log::trace!(
            target: "markup.balance",
            "{} closer(s) without opener ignored",
            pending_closers.len()
        );
    }
    unclosed
}

/// `fragment` with its missing closers appended.
pub fn close_unclosed_tags(fragment: &str, options: BalanceOptions) -> String {
    let closers = find_unclosed_tags_with(fragment, options);
    let extra: usize = closers.iter().map(String::len).sum();
    let mut out = String::with_capacity(fragment.len() + extra);
    out.push_str(fragment);
    for closer in &closers {
        out.push_str(closer);
    }
    out
}

/// True when no opener in `markup` is left without a closer.
///
/// Stray closers do not make markup unbalanced here.
pub fn is_balanced(markup: &str) -> bool {
    is_balanced_with(markup, BalanceOptions::default())
}

pub fn is_balanced_with(markup: &str, options: BalanceOptions) -> bool {
    find_unclosed_tags_with(markup, options).is_empty()
}

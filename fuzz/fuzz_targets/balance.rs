#![no_main]

use libfuzzer_sys::fuzz_target;
use markup::{BalanceOptions, find_unclosed_tags, scan_tags, unclosed_tags};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    // Total over any input: never panics, spans stay in bounds and ordered.
    let events = scan_tags(input);
    let mut last_end = 0;
    for event in &events {
        assert!(event.start >= last_end && event.end <= input.len());
        assert!(input.is_char_boundary(event.start) && input.is_char_boundary(event.end));
        last_end = event.end;
    }
    let closers = find_unclosed_tags(input);
    assert_eq!(closers, unclosed_tags(&events, BalanceOptions::default()));
    assert!(closers.len() <= events.iter().filter(|e| e.is_open()).count());
});

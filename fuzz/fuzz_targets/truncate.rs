#![no_main]

use libfuzzer_sys::fuzz_target;
use truncation::{TruncationController, TruncationOptions, safe_cut_index, truncate_markup};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let offset = u16::from_le_bytes([data[0], data[1]]) as usize;
    let Ok(input) = std::str::from_utf8(&data[2..]) else {
        return;
    };
    let partial = truncate_markup(input, offset, TruncationOptions::default());
    let cut = safe_cut_index(input, offset).unwrap_or(0);
    assert!(partial.starts_with(&input[..cut]));

    let mut controller = TruncationController::new(input, offset);
    assert_eq!(controller.displayed(), partial);
    controller.toggle();
    assert_eq!(controller.displayed(), input);
    controller.toggle();
    assert_eq!(controller.displayed(), partial);
});

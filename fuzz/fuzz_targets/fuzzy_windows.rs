// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy window search against its own definition.
//!
//! Every reported record must be a pattern-width window within the threshold,
//! every such window must be reported, and threshold zero must collapse to
//! exact search.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use needle::{distance, fuzzy_search, naive_count};

#[derive(Debug, Arbitrary)]
struct WindowInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
    max_distance: i8,
}

fn folded(bytes: &[u8], cap: usize) -> Vec<char> {
    bytes.iter().take(cap).map(|&b| (b'a' + b % 4) as char).collect()
}

fuzz_target!(|input: WindowInput| {
    let text = folded(&input.text, 256);
    let pattern = folded(&input.pattern, 12);
    let max_distance = i64::from(input.max_distance);

    let result = fuzzy_search(&text, &pattern, max_distance);
    if pattern.is_empty() || max_distance < 0 {
        assert!(result.is_err());
        return;
    }
    let records = result.expect("valid arguments");

    // INVARIANT 1: Exactly the windows within the threshold, in order
    let expected: Vec<usize> = text
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| distance(window, &pattern) as i64 <= max_distance)
        .map(|(i, _)| i)
        .collect();
    let positions: Vec<usize> = records.iter().map(|r| r.position).collect();
    assert_eq!(positions, expected);

    // INVARIANT 2: Records carry the true distance and the window text
    for record in &records {
        let window = &text[record.position..record.position + pattern.len()];
        assert_eq!(record.distance, distance(window, &pattern));
        assert_eq!(record.substring, window.iter().collect::<String>());
    }

    // INVARIANT 3: Threshold zero is exact search
    let exact = fuzzy_search(&text, &pattern, 0).expect("valid arguments");
    assert_eq!(Ok(exact.len()), naive_count(&text, &pattern));
});

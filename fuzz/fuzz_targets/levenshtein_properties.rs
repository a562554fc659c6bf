// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric laws and the bounded variant's early exits. The bounded
//! variant abandons a computation as soon as a whole row exceeds the bound; if
//! that cutoff is wrong it returns None for pairs that are actually in range,
//! and fuzzy search quietly misses matches.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use needle::{distance, distance_within, EditDistance};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fn capped(s: &str, cap: usize) -> Vec<char> {
    s.chars().take(cap).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = capped(&input.a, 40);
    let b = capped(&input.b, 40);
    let c = capped(&input.c, 40);
    let max = usize::from(input.max % 48);

    let d_ab = distance(&a, &b);

    // INVARIANT 1: Identity and symmetry
    assert_eq!(distance(&a, &a), 0);
    assert_eq!(d_ab, distance(&b, &a));

    // INVARIANT 2: Length bounds
    assert!(a.len().abs_diff(b.len()) <= d_ab);
    assert!(d_ab <= a.len().max(b.len()));

    // INVARIANT 3: Triangle inequality
    assert!(distance(&a, &c) <= d_ab + distance(&b, &c));

    // INVARIANT 4: Bounded distance is exact within the bound
    let bounded = distance_within(&a, &b, max);
    if d_ab <= max {
        assert_eq!(bounded, Some(d_ab), "a={:?} b={:?} max={}", a, b, max);
    } else {
        assert_eq!(bounded, None, "a={:?} b={:?} max={}", a, b, max);
    }

    // INVARIANT 5: Scratch reuse leaves no residue between calls
    let mut scratch = EditDistance::new();
    scratch.distance(&c, &a);
    assert_eq!(scratch.distance(&a, &b), d_ab);
});

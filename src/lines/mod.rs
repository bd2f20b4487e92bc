// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circuit lines and bit-level helpers.
//!
//! This module contains type-safe representations of the wires of a circuit:
//! - Line: A single circuit line (0..n-1), labelled 'a', 'b', ...
//! - LineSet: Bitset of lines, bit j being line j
//! - constants: Limits on the number of lines

pub mod constants;
pub mod line;
pub mod line_set;

pub use constants::*;
pub use line::Line;
pub use line_set::LineSet;

/// Number of bit positions in which `a` and `b` differ.
pub fn hamming_distance(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

/// Number of set bits in `value` (the number of control lines a mask selects).
pub fn weight(value: u32) -> u32 {
    value.count_ones()
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Limits on circuit width.
//!
//! A function over `n` lines has a truth table of `2^n` rows, and the control
//! line search enumerates up to `2^n` candidates per target bit, so the work
//! grows roughly as `n · 4^n`. The hard limit below is the one the interactive
//! editor always accepted; anything past [`PRACTICAL_MAX_LINES`] is slow.

/// Largest number of lines accepted by the engine.
///
/// Lines are labelled 'a'..'z', so this is also the number of labels.
pub const MAX_LINES: usize = 26;

/// Largest width that synthesizes in well under a second on commodity hardware.
pub const PRACTICAL_MAX_LINES: usize = 12;

/// Number of rows in the truth table of a function over `lines` lines.
///
/// # Panics
///
/// Panics if `lines > MAX_LINES`.
pub const fn row_count(lines: usize) -> usize {
    assert!(lines <= MAX_LINES, "too many lines");
    1 << lines
}

/// Upper bound on the gates emitted by one synthesis pass over `lines` lines.
///
/// Each row is visited once and each of its bits is the target of at most one gate.
pub const fn gate_bound(lines: usize) -> usize {
    lines * row_count(lines)
}

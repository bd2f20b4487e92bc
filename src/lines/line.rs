// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line type for circuit wires.
//!
//! A circuit over `n` lines has lines 0..n. Line `j` carries bit `j` of a packed
//! value and is labelled with the letter `'a' + j`.

use crate::lines::constants::MAX_LINES;
use std::fmt;

/// A circuit line in the range 0..MAX_LINES.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// lines with bit masks or row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(u8);

impl Line {
    /// Create a new line, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_LINES`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < MAX_LINES, "Line out of range: {}", value);
        Self(value)
    }

    /// Try to create a new line, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < MAX_LINES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The line whose bit is the lowest set bit of `mask`, if any.
    pub fn lowest_of(mask: u32) -> Option<Self> {
        if mask == 0 {
            None
        } else {
            Self::try_new(mask.trailing_zeros() as u8)
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the line as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The single-bit mask selecting this line in a packed value.
    pub fn mask(self) -> u32 {
        1 << self.0
    }

    /// The letter used to label this line ('a' for line 0).
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_new() {
        let line = Line::new(0);
        assert_eq!(line.value(), 0);

        let line = Line::new(25);
        assert_eq!(line.as_usize(), 25);
    }

    #[test]
    #[should_panic(expected = "Line out of range")]
    fn test_line_out_of_range() {
        Line::new(26);
    }

    #[test]
    fn test_line_try_new() {
        assert!(Line::try_new(0).is_some());
        assert!(Line::try_new(25).is_some());
        assert!(Line::try_new(26).is_none());
    }

    #[test]
    fn test_mask_and_lowest() {
        assert_eq!(Line::new(3).mask(), 0b1000);
        assert_eq!(Line::lowest_of(0b1100), Some(Line::new(2)));
        assert_eq!(Line::lowest_of(0), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Line::new(0).to_char(), 'a');
        assert_eq!(Line::new(25).to_char(), 'z');
        assert_eq!(format!("{}", Line::new(1)), "b");
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LineSet type for representing sets of circuit lines as bitsets.
//!
//! A LineSet uses the same encoding as the packed values of a truth table:
//! bit j is set if line j is in the set. Control sets and target masks are
//! therefore interchangeable with the raw masks the synthesis engine works on.
//!
//! # Examples
//!
//! ```
//! use revsynth::lines::{Line, LineSet};
//!
//! let mut set = LineSet::empty();
//! set.insert(Line::new(0));
//! set.insert(Line::new(2));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.bits(), 0b101);
//! assert_eq!(format!("{}", set), "|ac|");
//!
//! let labels: Vec<char> = set.iter().map(|l| l.to_char()).collect();
//! assert_eq!(labels, vec!['a', 'c']);
//! ```

use crate::lines::Line;
use std::fmt;

/// A set of lines represented as a bitset.
///
/// Bit i (counting from LSB) is set if line i is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSet(u32);

impl LineSet {
    /// Create an empty line set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set containing lines 0..width.
    pub fn full(width: usize) -> Self {
        if width >= 32 {
            Self(u32::MAX)
        } else {
            Self((1 << width) - 1)
        }
    }

    /// Create a line set from a raw mask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific line.
    pub fn contains(self, line: Line) -> bool {
        self.0 & line.mask() != 0
    }

    /// Insert a line into the set.
    pub fn insert(&mut self, line: Line) {
        self.0 |= line.mask();
    }

    /// Get the number of lines in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying mask.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// True if every line of `self` is also in `other`.
    pub fn is_subset_of(self, other: LineSet) -> bool {
        self.0 & other.0 == self.0
    }

    /// Lowest line in the set.
    pub fn first(self) -> Option<Line> {
        Line::lowest_of(self.0)
    }

    /// Highest line in the set.
    pub fn last(self) -> Option<Line> {
        if self.0 == 0 {
            None
        } else {
            Line::try_new((31 - self.0.leading_zeros()) as u8)
        }
    }

    /// Iterate over all lines in the set.
    ///
    /// Lines are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = Line> {
        LineSetIter { bits: self.0 }
    }
}

/// Iterator over lines in a LineSet.
struct LineSetIter {
    bits: u32,
}

impl Iterator for LineSetIter {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        let line = Line::lowest_of(self.bits)?;
        self.bits &= self.bits - 1;
        Some(line)
    }
}

impl fmt::Display for LineSet {
    /// Format a line set as "|abc|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for line in self.iter() {
            write!(f, "{}", line.to_char())?;
        }
        write!(f, "|")
    }
}

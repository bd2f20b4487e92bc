// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters recorded while a synthesis pass transforms its table.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display as DisplayMacro, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, DisplayMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Counters {
    /// Gates appended to either gate list.
    GatesEmitted,
    /// Rows fixed by transforming the output side.
    OutputSteps,
    /// Rows fixed by transforming the input side.
    InputSteps,
    /// Rows that already mapped to themselves when visited.
    SkippedRows,
    /// Times the table was reordered by input after an input step.
    TableResorts,
    /// Control-line candidates enumerated over all gates.
    ControlCandidates,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    /// Format as `name=value` pairs separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for counter in Counters::iter() {
            write!(f, "{}{}={}", separator, counter, self.get(counter))?;
            separator = " ";
        }
        Ok(())
    }
}

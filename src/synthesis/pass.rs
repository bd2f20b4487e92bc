// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The row steps shared by all three strategies.
//!
//! A [`Pass`] owns the table being transformed. Each step fixes one row pair
//! `(i, i)` without disturbing the pairs already fixed, recording the gates it
//! applies. Both steps split the differing bits of the row into the bits that
//! must be raised (`p`) and the bits that must be cleared (`q`), and flip them
//! one at a time in ascending line order, raising first. The row is re-read
//! before every flip, since the previous gate of the same step changed it.

use crate::errors::{SynthesisError, Violation};
use crate::lines::{hamming_distance, LineSet};
use crate::synthesis::builder::GateListBuilder;
use crate::synthesis::controls::{best_control_line, valid_control_lines, ControlSelection};
use crate::synthesis::statistics::{Counters, Statistics};
use crate::table::{PermutationTable, Side, TruthTable};
use tracing::debug;

/// State of one synthesis run.
#[derive(Debug)]
pub(crate) struct Pass {
    table: PermutationTable,
    selection: ControlSelection,
    statistics: Statistics,
}

impl Pass {
    pub(crate) fn new(table: &TruthTable, selection: ControlSelection) -> Self {
        Self {
            table: PermutationTable::new(table),
            selection,
            statistics: Statistics::new(),
        }
    }

    pub(crate) fn table(&self) -> &PermutationTable {
        &self.table
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Fix the row at `position` by transforming the output side.
    ///
    /// The first row is special: every set bit of `f(0)` is cleared with an
    /// uncontrolled NOT gate.
    pub(crate) fn output_step(
        &mut self,
        position: usize,
        gates: &mut GateListBuilder,
    ) -> Result<(), SynthesisError> {
        let row = self.table.row(position);
        if row.is_fixed() {
            self.statistics.increment(Counters::SkippedRows);
            return Ok(());
        }
        debug!(position, input = row.input, output = row.output, "output step");
        self.statistics.increment(Counters::OutputSteps);

        if position == 0 {
            for line in LineSet::from_bits(row.output).iter() {
                self.table.apply_gate(Side::Output, line.mask(), 0);
                gates.push(line, LineSet::empty());
                self.statistics.increment(Counters::GatesEmitted);
            }
            return Ok(());
        }

        let differing = row.input ^ row.output;
        let raise = differing & row.input;
        let clear = differing & row.output;
        self.flip_bits(Side::Output, position, row.input, [raise, clear], gates)?;
        Ok(())
    }

    /// Fix the pair for `value` by transforming the input side of the row that
    /// outputs it.
    ///
    /// Returns true if any gate was applied, which leaves the rows out of input
    /// order.
    pub(crate) fn input_step(
        &mut self,
        value: u32,
        gates: &mut GateListBuilder,
    ) -> Result<bool, SynthesisError> {
        let position = self.table.reverse_lookup(value)?;
        let input = self.table.row(position).input;
        if input == value {
            self.statistics.increment(Counters::SkippedRows);
            return Ok(false);
        }
        debug!(value, position, input, "input step");
        self.statistics.increment(Counters::InputSteps);

        let differing = value ^ input;
        let raise = differing & value;
        let clear = differing & input;
        self.flip_bits(Side::Input, position, value, [raise, clear], gates)?;
        Ok(true)
    }

    /// Hamming distances of the two ways to fix the pair for row `position`:
    /// `(output side, input side)`.
    pub(crate) fn step_costs(&self, position: usize) -> Result<(u32, u32), SynthesisError> {
        let value = position as u32;
        let source = self.table.row(self.table.reverse_lookup(value)?).input;
        let output = self.table.row(position).output;
        Ok((hamming_distance(value, output), hamming_distance(value, source)))
    }

    /// Put the rows back in input order after an input step.
    pub(crate) fn resort(&mut self) {
        self.table.sort_by_input();
        self.statistics.increment(Counters::TableResorts);
    }

    /// Check the table reached the identity and hand back the counters.
    pub(crate) fn finish(self) -> Result<Statistics, SynthesisError> {
        self.table.check_identity()?;
        Ok(self.statistics)
    }

    /// Flip every bit of each mask in turn on `side` of the row at `position`,
    /// moving its value toward `to`.
    fn flip_bits(
        &mut self,
        side: Side,
        position: usize,
        to: u32,
        masks: [u32; 2],
        gates: &mut GateListBuilder,
    ) -> Result<(), Violation> {
        for mask in masks {
            for target in LineSet::from_bits(mask).iter() {
                let from = self.table.row(position).get(side);
                let candidates = valid_control_lines(target.mask(), from, to);
                self.statistics
                    .add(Counters::ControlCandidates, candidates.len() as u64);
                let controls = best_control_line(&candidates, self.selection).ok_or(
                    Violation::NoControlCandidates {
                        target: target.mask(),
                        from,
                        to,
                    },
                )?;
                self.table.apply_gate(side, target.mask(), controls);
                gates.push(target, LineSet::from_bits(controls));
                self.statistics.increment(Counters::GatesEmitted);
            }
        }
        Ok(())
    }
}

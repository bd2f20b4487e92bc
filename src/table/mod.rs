// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The permutation table the synthesis algorithms transform.
//!
//! A [`PermutationTable`] holds one [`Row`] per input value, pairing the value
//! on the input side with the value on the output side. It starts as
//! `(i, f(i))` for every `i`, and every gate the engine chooses is applied to
//! one side of every row. Synthesis succeeds when every row reads `(i, i)`.
//!
//! Both columns stay permutations of `0..2^n` for a reversible function, since
//! each gate is a bijection on values. A lookup that finds nothing therefore
//! proves the function was not reversible to begin with.

pub mod spec_file;
pub mod truth_table;

pub use truth_table::TruthTable;

use crate::errors::{MalformedInput, Violation};
use crate::lines::hamming_distance;

/// Which column of the table a gate is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Input,
    Output,
}

/// One input/output pair of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row {
    pub input: u32,
    pub output: u32,
}

impl Row {
    /// The value on the given side.
    pub fn get(self, side: Side) -> u32 {
        match side {
            Side::Input => self.input,
            Side::Output => self.output,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Input => &mut self.input,
            Side::Output => &mut self.output,
        }
    }

    /// True once the row maps its input to itself.
    pub fn is_fixed(self) -> bool {
        self.input == self.output
    }
}

/// Working representation of a function being transformed to the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    width: usize,
    rows: Vec<Row>,
}

impl PermutationTable {
    /// Create the table `(i, f(i))` for a truth table.
    pub fn new(table: &TruthTable) -> Self {
        let rows = table
            .outputs()
            .iter()
            .enumerate()
            .map(|(input, &output)| Row {
                input: input as u32,
                output,
            })
            .collect();
        Self {
            width: table.width(),
            rows,
        }
    }

    /// Create the table directly from a `2^n × n` bit matrix.
    pub fn from_bit_matrix<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self, MalformedInput> {
        Ok(Self::new(&TruthTable::from_bits(matrix)?))
    }

    /// Number of lines.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn row(&self, position: usize) -> Row {
        self.rows[position]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Apply a Toffoli gate to one side of every row.
    ///
    /// Every value on `side` that has all `controls` bits set has `target`
    /// XORed into it. Applying the same gate twice restores the table.
    pub fn apply_gate(&mut self, side: Side, target: u32, controls: u32) {
        for row in &mut self.rows {
            let value = row.get_mut(side);
            if *value & controls == controls {
                *value ^= target;
            }
        }
    }

    /// Position of the row whose output equals `value`.
    pub fn position_of_output(&self, value: u32) -> Option<usize> {
        self.rows.iter().position(|row| row.output == value)
    }

    /// Like [`position_of_output`](Self::position_of_output), failing when no row matches.
    pub fn reverse_lookup(&self, value: u32) -> Result<usize, Violation> {
        self.position_of_output(value)
            .ok_or(Violation::MissingOutput { value })
    }

    /// Reorder the rows so that row `i` has input `i`.
    ///
    /// The input column is always a permutation, so ordering by input yields the
    /// same table as scanning for each input value in turn.
    pub fn sort_by_input(&mut self) {
        self.rows.sort_unstable_by_key(|row| row.input);
    }

    /// True if every row maps its input to itself.
    pub fn is_identity(&self) -> bool {
        self.rows.iter().all(|row| row.is_fixed())
    }

    /// Fail with the first row that does not map its input to itself.
    pub fn check_identity(&self) -> Result<(), Violation> {
        match self.rows.iter().position(|row| !row.is_fixed()) {
            None => Ok(()),
            Some(position) => Err(Violation::NotIdentity {
                row: position,
                output: self.rows[position].output,
            }),
        }
    }

    /// Sum of the Hamming distances between input and output of every row.
    ///
    /// This is zero exactly for the identity, and drops as the table is
    /// transformed.
    pub fn complexity(&self) -> u32 {
        self.rows
            .iter()
            .map(|row| hamming_distance(row.input, row.output))
            .sum()
    }
}

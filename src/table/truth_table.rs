// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated truth tables of reversible functions.
//!
//! A truth table over `n` lines is a `2^n × n` matrix of bits. Row `i` is the
//! output pattern for input `i`, most significant column first, so column `c`
//! becomes bit `n-1-c` of the packed output.

use crate::errors::MalformedInput;
use crate::lines::{row_count, MAX_LINES};
use std::fmt;

/// A rectangular `2^n × n` bit matrix, stored as one packed output per row.
///
/// Construction checks the shape only; whether the rows form a permutation is
/// discovered by the synthesis engine.
///
/// # Examples
///
/// ```
/// use revsynth::table::TruthTable;
///
/// // Swap of the two middle rows on two lines.
/// let table = TruthTable::from_bits(&[[0u8, 0], [1, 0], [0, 1], [1, 1]]).unwrap();
/// assert_eq!(table.width(), 2);
/// assert_eq!(table.outputs(), &[0, 2, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    width: usize,
    outputs: Vec<u32>,
}

impl TruthTable {
    /// Build a table from rows of `0`/`1` values.
    pub fn from_bits<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self, MalformedInput> {
        let first = matrix.first().ok_or(MalformedInput::Empty)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(MalformedInput::ZeroWidth);
        }
        if width > MAX_LINES {
            return Err(MalformedInput::TooWide {
                width,
                max: MAX_LINES,
            });
        }

        let expected = row_count(width);
        if matrix.len() != expected {
            return Err(MalformedInput::RowCount {
                expected,
                actual: matrix.len(),
            });
        }

        let mut outputs = Vec::with_capacity(expected);
        for (row, bits) in matrix.iter().enumerate() {
            let bits = bits.as_ref();
            if bits.len() != width {
                return Err(MalformedInput::RaggedRow {
                    row,
                    expected: width,
                    actual: bits.len(),
                });
            }
            let mut packed = 0u32;
            for (column, &value) in bits.iter().enumerate() {
                match value {
                    0 => {}
                    1 => packed |= 1 << (width - 1 - column),
                    _ => {
                        return Err(MalformedInput::NonBinary { row, column, value });
                    }
                }
            }
            outputs.push(packed);
        }

        Ok(Self { width, outputs })
    }

    /// Build a table from already packed outputs, `outputs[i] = f(i)`.
    pub fn from_outputs(width: usize, outputs: Vec<u32>) -> Result<Self, MalformedInput> {
        if width == 0 {
            return Err(MalformedInput::ZeroWidth);
        }
        if width > MAX_LINES {
            return Err(MalformedInput::TooWide {
                width,
                max: MAX_LINES,
            });
        }
        let expected = row_count(width);
        if outputs.len() != expected {
            return Err(MalformedInput::RowCount {
                expected,
                actual: outputs.len(),
            });
        }
        if let Some(row) = outputs.iter().position(|&value| value as usize >= expected) {
            return Err(MalformedInput::OutputOutOfRange {
                row,
                value: outputs[row],
            });
        }
        Ok(Self { width, outputs })
    }

    /// The identity function over `width` lines.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0 or larger than `MAX_LINES`.
    pub fn identity(width: usize) -> Self {
        assert!(width > 0, "identity table needs at least one line");
        Self {
            width,
            outputs: (0..row_count(width) as u32).collect(),
        }
    }

    /// Number of lines (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, `2^width`.
    pub fn row_count(&self) -> usize {
        self.outputs.len()
    }

    /// Packed output of row `input`.
    pub fn output(&self, input: usize) -> u32 {
        self.outputs[input]
    }

    /// All packed outputs in input order.
    pub fn outputs(&self) -> &[u32] {
        &self.outputs
    }

    /// The bits of row `input`, most significant column first.
    pub fn row_bits(&self, input: usize) -> Vec<u8> {
        let value = self.outputs[input];
        (0..self.width)
            .map(|column| ((value >> (self.width - 1 - column)) & 1) as u8)
            .collect()
    }

    /// The whole matrix as rows of bits.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        (0..self.row_count()).map(|row| self.row_bits(row)).collect()
    }

    /// True if every row maps to itself.
    pub fn is_identity(&self) -> bool {
        self.outputs
            .iter()
            .enumerate()
            .all(|(input, &output)| input as u32 == output)
    }

    /// True if every output value occurs exactly once.
    pub fn is_bijective(&self) -> bool {
        let mut seen = vec![false; self.outputs.len()];
        for &output in &self.outputs {
            let slot = &mut seen[output as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}

impl fmt::Display for TruthTable {
    /// One row per line, `input -> output` in binary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (input, output) in self.outputs.iter().enumerate() {
            writeln!(
                f,
                "{:0width$b} -> {:0width$b}",
                input,
                output,
                width = self.width
            )?;
        }
        Ok(())
    }
}

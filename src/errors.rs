// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for synthesis.
//!
//! The engine has exactly one runtime failure, [`SynthesisError::NotReversible`]:
//! a lookup the algorithms depend on found nothing, which can only happen when
//! the truth table is not a bijection. Shape problems in the caller's matrix are
//! reported separately as [`SynthesisError::MalformedInput`] before any work starts.

use thiserror::Error;

/// Errors returned by a synthesis call. No circuit is produced on any error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The truth table does not describe a permutation.
    #[error("entered function is not reversible: {0}")]
    NotReversible(#[from] Violation),

    /// The truth table matrix is not a `2^n × n` matrix of bits.
    #[error("malformed truth table: {0}")]
    MalformedInput(#[from] MalformedInput),
}

impl SynthesisError {
    /// True for [`SynthesisError::NotReversible`].
    pub fn is_not_reversible(&self) -> bool {
        matches!(self, SynthesisError::NotReversible(_))
    }
}

/// The lookup that failed while transforming a table toward the identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// No row of the table has this value on its output side.
    #[error("no row maps to {value}")]
    MissingOutput { value: u32 },

    /// No control set can move `from` toward `to` by flipping `target`.
    #[error("no control lines map {from} to {to} with target mask {target:#b}")]
    NoControlCandidates { target: u32, from: u32, to: u32 },

    /// A full pass finished without reaching the identity permutation.
    #[error("row {row} still maps to {output} after synthesis")]
    NotIdentity { row: usize, output: u32 },
}

/// Shape and content problems in a truth table matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("truth table has no rows")]
    Empty,

    #[error("truth table rows have no columns")]
    ZeroWidth,

    #[error("{width} lines requested but at most {max} are supported")]
    TooWide { width: usize, max: usize },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("truth table has {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row}, column {column} holds {value}, expected 0 or 1")]
    NonBinary { row: usize, column: usize, value: u8 },

    #[error("row {row} has output {value}, which does not fit the table width")]
    OutputOutOfRange { row: usize, value: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_reversible_message() {
        let err = SynthesisError::from(Violation::MissingOutput { value: 3 });
        assert!(err.is_not_reversible());
        assert_eq!(
            err.to_string(),
            "entered function is not reversible: no row maps to 3"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = SynthesisError::from(MalformedInput::RaggedRow {
            row: 2,
            expected: 3,
            actual: 1,
        });
        assert!(!err.is_not_reversible());
        assert_eq!(
            err.to_string(),
            "malformed truth table: row 2 has 1 columns, expected 3"
        );
    }
}

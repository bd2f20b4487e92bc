// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text formats for truth tables.
//!
//! Two adapters produce a [`TruthTable`]:
//!
//! - The specification file format: whitespace-separated tokens, the number of
//!   lines `n` first, then the `2^n · n` output bits row by row.
//!
//!   ```text
//!   2
//!   0 0
//!   1 0
//!   0 1
//!   1 1
//!   ```
//!
//! - Row strings such as `["00", "10", "01", "11"]`, one string per row, the
//!   way rows are typed into a table editor. The number of rows fixes `n`.

use crate::errors::MalformedInput;
use crate::lines::MAX_LINES;
use crate::table::TruthTable;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Problems reading a truth table from text.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("specification is empty, expected the number of lines first")]
    MissingLineCount,

    #[error("specification contains {token:?}, which is not an integer")]
    NotAnInteger { token: String },

    #[error("number of lines must be in the range [1, {max}], found {value}")]
    LineCountOutOfRange { value: i64, max: usize },

    #[error("specification contains {token:?}, which is not a 1 or a 0")]
    NotBinary { token: String },

    #[error("specification holds {found} values, expected {expected}")]
    Insufficient { expected: usize, found: usize },

    #[error("{count} rows given, expected a power of two of at least 2")]
    RowCountNotPowerOfTwo { count: usize },

    #[error("row {row} has {actual} characters, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid character {found:?} in row {row}, at column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        found: char,
    },

    #[error(transparent)]
    Table(#[from] MalformedInput),
}

/// Read a specification file from disk.
pub fn read_spec(path: impl AsRef<Path>) -> Result<TruthTable, SpecError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_spec(&text)
}

/// Parse the specification file format.
///
/// # Examples
///
/// ```
/// use revsynth::table::spec_file::parse_spec;
///
/// let table = parse_spec("1\n1\n0\n").unwrap();
/// assert_eq!(table.outputs(), &[1, 0]);
/// ```
pub fn parse_spec(text: &str) -> Result<TruthTable, SpecError> {
    let mut tokens = text.split_whitespace();

    let width = tokens.next().ok_or(SpecError::MissingLineCount)?;
    let width = parse_integer(width)?;
    if width < 1 || width > MAX_LINES as i64 {
        return Err(SpecError::LineCountOutOfRange {
            value: width,
            max: MAX_LINES,
        });
    }
    let width = width as usize;
    let rows = 1usize << width;
    let expected = rows * width;

    let mut found = 0;
    let mut matrix = Vec::new();
    for _ in 0..rows {
        let mut bits = Vec::with_capacity(width);
        for _ in 0..width {
            let token = tokens
                .next()
                .ok_or(SpecError::Insufficient { expected, found })?;
            match parse_integer(token)? {
                0 => bits.push(0u8),
                1 => bits.push(1u8),
                _ => {
                    return Err(SpecError::NotBinary {
                        token: token.to_string(),
                    })
                }
            }
            found += 1;
        }
        matrix.push(bits);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, "ignoring values after the last row of the specification");
    }

    Ok(TruthTable::from_bits(&matrix)?)
}

fn parse_integer(token: &str) -> Result<i64, SpecError> {
    token.parse().map_err(|_| SpecError::NotAnInteger {
        token: token.to_string(),
    })
}

/// Parse one string of `0`/`1` characters per row.
///
/// Surrounding whitespace of each row is ignored.
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<TruthTable, SpecError> {
    let count = rows.len();
    if count < 2 || !count.is_power_of_two() {
        return Err(SpecError::RowCountNotPowerOfTwo { count });
    }
    let width = count.trailing_zeros() as usize;
    if width > MAX_LINES {
        return Err(SpecError::LineCountOutOfRange {
            value: width as i64,
            max: MAX_LINES,
        });
    }

    let mut matrix = Vec::with_capacity(count);
    for (row, text) in rows.iter().enumerate() {
        let text = text.as_ref().trim();
        let actual = text.chars().count();
        if actual != width {
            return Err(SpecError::RowLength {
                row,
                expected: width,
                actual,
            });
        }
        let bits = text
            .chars()
            .enumerate()
            .map(|(column, found)| match found {
                '0' => Ok(0u8),
                '1' => Ok(1u8),
                _ => Err(SpecError::InvalidCharacter { row, column, found }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        matrix.push(bits);
    }

    Ok(TruthTable::from_bits(&matrix)?)
}

/// Write a table in the specification file format accepted by [`parse_spec`].
pub fn format_spec(table: &TruthTable) -> String {
    let rows: String = table
        .to_bits()
        .iter()
        .map(|row| {
            let bits: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("{}\n", bits.join(" "))
        })
        .collect();
    format!("{}\n{}", table.width(), rows)
}

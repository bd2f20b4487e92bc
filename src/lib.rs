// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transformation-based synthesis of reversible circuits.
//!
//! Given a reversible boolean function of `n` variables, written as a truth
//! table of `2^n` rows, the crate produces a cascade of generalized Toffoli
//! gates realizing it. Synthesis follows Miller, Maslov and Dueck, "A
//! transformation based algorithm for reversible logic synthesis" (DAC 2003),
//! in its output, input and bidirectional forms.
//!
//! # Layout
//!
//! - [`lines`]: circuit lines, sets of lines and bit helpers
//! - [`table`]: truth tables, the mutable permutation table and spec files
//! - [`circuit`]: gates, circuits and their text forms
//! - [`synthesis`]: the three algorithms and their configuration
//! - [`errors`]: failure types
//!
//! # Conventions
//!
//! Line `j` is bit `j` of a row value and is written `'a' + j`. In a truth
//! table row the leftmost column is the most significant bit, so column `c` of
//! an `n` column row is line `n - 1 - c`. A gate flips its target when every
//! control line is 1.
//!
//! # Example
//!
//! ```
//! use revsynth::{synthesize, Strategy, TruthTable};
//!
//! // Swap the two lines: 00->00, 01->10, 10->01, 11->11.
//! let table = TruthTable::from_bits(&[[0u8, 0], [1, 0], [0, 1], [1, 1]]).unwrap();
//! let circuit = synthesize(&table, Strategy::Output).unwrap();
//!
//! assert_eq!(circuit.len(), 3);
//! assert_eq!(circuit.permutation(), table.outputs());
//! ```

pub mod circuit;
pub mod errors;
pub mod lines;
pub mod synthesis;
pub mod table;

pub use circuit::{Circuit, Gate, Role};
pub use errors::{MalformedInput, SynthesisError, Violation};
pub use lines::{Line, LineSet};
pub use synthesis::{
    synthesize, ControlSelection, Statistics, Strategy, Synthesis, SynthesisConfig, Synthesizer,
};
pub use table::{PermutationTable, TruthTable};

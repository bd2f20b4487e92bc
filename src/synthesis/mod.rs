// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transformation-based synthesis.
//!
//! Implements the three transformation algorithms of Miller, Maslov and Dueck,
//! "A transformation based algorithm for reversible logic synthesis"
//! (DAC 2003). Each one drives a [`PermutationTable`](crate::table::PermutationTable)
//! to the identity one row at a time, choosing for every bit that must change a
//! Toffoli gate whose controls leave the rows already fixed untouched. The
//! recorded gates, suitably ordered, form the circuit.
//!
//! | Strategy | Side transformed | Final order |
//! |---|---|---|
//! | [`Strategy::Output`] | output | reversed |
//! | [`Strategy::Input`] | input | as recorded |
//! | [`Strategy::Bidirectional`] | cheaper per row | input gates, then output gates reversed |
//!
//! # Example
//!
//! ```
//! use revsynth::synthesis::{synthesize, Strategy};
//! use revsynth::table::TruthTable;
//!
//! // NOT on a single line.
//! let table = TruthTable::from_bits(&[[1u8], [0]]).unwrap();
//! let circuit = synthesize(&table, Strategy::Output).unwrap();
//! assert_eq!(circuit.to_string(), "t1 a\n");
//! ```

pub mod bidirectional;
pub mod builder;
pub mod controls;
pub mod input;
pub mod output;
mod pass;
pub mod statistics;

pub use builder::GateListBuilder;
pub use controls::ControlSelection;
pub use statistics::{Counters, Statistics};

use crate::circuit::Circuit;
use crate::errors::{MalformedInput, SynthesisError};
use crate::lines::{MAX_LINES, PRACTICAL_MAX_LINES};
use crate::table::TruthTable;
use strum_macros::{Display as DisplayMacro, EnumIter, EnumString};
use tracing::{info, warn};

/// Which transformation drives the table to the identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, DisplayMacro, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Output,
    Input,
    Bidirectional,
}

/// Settings of a [`Synthesizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    pub strategy: Strategy,
    pub selection: ControlSelection,
    /// Widest table accepted.
    pub max_lines: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            selection: ControlSelection::default(),
            max_lines: MAX_LINES,
        }
    }
}

impl SynthesisConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_selection(mut self, selection: ControlSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Limit the width of accepted tables. Values above `MAX_LINES` are clamped.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines.min(MAX_LINES);
        self
    }
}

/// Result of a successful synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub circuit: Circuit,
    pub statistics: Statistics,
}

/// Runs synthesis with a fixed configuration.
///
/// Each call builds its own table and gate lists, so one synthesizer can be
/// shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize a circuit realizing `table`.
    pub fn run(&self, table: &TruthTable) -> Result<Synthesis, SynthesisError> {
        let SynthesisConfig {
            strategy,
            selection,
            max_lines,
        } = self.config;

        let width = table.width();
        if width > max_lines {
            return Err(MalformedInput::TooWide {
                width,
                max: max_lines,
            }
            .into());
        }
        if width > PRACTICAL_MAX_LINES {
            warn!(width, "synthesis time grows as 4^n; expect a long run");
        }

        let synthesis = match strategy {
            Strategy::Output => output::synthesize(table, selection)?,
            Strategy::Input => input::synthesize(table, selection)?,
            Strategy::Bidirectional => bidirectional::synthesize(table, selection)?,
        };

        info!(
            %strategy,
            %selection,
            width,
            gates = synthesis.circuit.len(),
            controls = synthesis.circuit.control_count(),
            "synthesis complete"
        );
        Ok(synthesis)
    }
}

/// Synthesize a circuit for `table` with the given strategy and default settings.
pub fn synthesize(table: &TruthTable, strategy: Strategy) -> Result<Circuit, SynthesisError> {
    let config = SynthesisConfig::default().with_strategy(strategy);
    Synthesizer::new(config)
        .run(table)
        .map(|synthesis| synthesis.circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_strategy_names() {
        let names: Vec<String> = Strategy::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["output", "input", "bidirectional"]);
        assert_eq!(
            Strategy::from_str("bidirectional").unwrap(),
            Strategy::Bidirectional
        );
        assert!(Strategy::from_str("sideways").is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = SynthesisConfig::default();
        assert_eq!(config.strategy, Strategy::Output);
        assert_eq!(config.selection, ControlSelection::Reference);
        assert_eq!(config.max_lines, MAX_LINES);
        assert_eq!(config.with_max_lines(100).max_lines, MAX_LINES);
    }

    #[test]
    fn test_identity_for_every_strategy() {
        let table = TruthTable::identity(3);
        for strategy in Strategy::iter() {
            let circuit = synthesize(&table, strategy).unwrap();
            assert!(circuit.is_empty(), "{strategy} emitted gates");
            assert_eq!(circuit.width(), 3);
        }
    }

    #[test]
    fn test_max_lines() {
        let synthesizer = Synthesizer::new(SynthesisConfig::default().with_max_lines(2));
        let err = synthesizer.run(&TruthTable::identity(3)).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::MalformedInput(MalformedInput::TooWide { width: 3, max: 2 })
        );
    }

    #[test]
    fn test_statistics_reported() {
        let table = TruthTable::from_outputs(2, vec![0, 2, 1, 3]).unwrap();
        let synthesis = Synthesizer::default().run(&table).unwrap();
        assert_eq!(
            synthesis.statistics.get(Counters::GatesEmitted),
            synthesis.circuit.len() as u64
        );
        // Row 1 leaves 3 -> 2 behind in row 2, which needs its own step.
        assert_eq!(synthesis.statistics.get(Counters::OutputSteps), 2);
        assert_eq!(synthesis.statistics.get(Counters::SkippedRows), 2);
        assert_eq!(
            synthesis.statistics.get(Counters::OutputSteps)
                + synthesis.statistics.get(Counters::SkippedRows),
            4
        );
    }
}

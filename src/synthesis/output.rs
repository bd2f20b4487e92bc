// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output transformation.
//!
//! Visits the rows in index order and fixes each one by applying gates to the
//! output side of the table. The recorded gates drive `f` to the identity, so
//! the circuit realizing `f` is the recorded list reversed.

use crate::errors::SynthesisError;
use crate::synthesis::builder::GateListBuilder;
use crate::synthesis::controls::ControlSelection;
use crate::synthesis::pass::Pass;
use crate::synthesis::Synthesis;
use crate::table::TruthTable;

/// Synthesize `table` by output transformation.
pub fn synthesize(
    table: &TruthTable,
    selection: ControlSelection,
) -> Result<Synthesis, SynthesisError> {
    let mut pass = Pass::new(table, selection);
    let mut gates = GateListBuilder::new(table.width());

    for position in 0..pass.len() {
        pass.output_step(position, &mut gates)?;
    }

    let statistics = pass.finish()?;
    Ok(Synthesis {
        circuit: gates.into_reversed(),
        statistics,
    })
}

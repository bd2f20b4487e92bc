// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bidirectional transformation.
//!
//! For each row `i` both steps are priced by Hamming distance: fixing `(i, f(i))`
//! on the output side costs `d(i, f(i))`, fixing the pair that outputs `i` on
//! the input side costs `d(i, f⁻¹(i))`. The cheaper step is taken, preferring
//! the output side on a tie. Input steps reorder rows, so the table is put back
//! in input order after each one.

use crate::errors::SynthesisError;
use crate::synthesis::builder::GateListBuilder;
use crate::synthesis::controls::ControlSelection;
use crate::synthesis::pass::Pass;
use crate::synthesis::statistics::Statistics;
use crate::synthesis::Synthesis;
use crate::table::TruthTable;
use tracing::debug;

/// The two gate lists of a bidirectional run, before merging.
#[derive(Debug)]
pub(crate) struct GateLists {
    pub(crate) input: GateListBuilder,
    pub(crate) output: GateListBuilder,
    pub(crate) statistics: Statistics,
}

pub(crate) fn accumulate(
    table: &TruthTable,
    selection: ControlSelection,
) -> Result<GateLists, SynthesisError> {
    let mut pass = Pass::new(table, selection);
    let mut input = GateListBuilder::new(table.width());
    let mut output = GateListBuilder::new(table.width());

    for position in 0..pass.len() {
        let (output_cost, input_cost) = pass.step_costs(position)?;
        debug!(position, output_cost, input_cost, "pricing row");
        if output_cost <= input_cost {
            pass.output_step(position, &mut output)?;
        } else if pass.input_step(position as u32, &mut input)? {
            pass.resort();
        }
    }

    let statistics = pass.finish()?;
    Ok(GateLists {
        input,
        output,
        statistics,
    })
}

/// Synthesize `table` by bidirectional transformation.
pub fn synthesize(
    table: &TruthTable,
    selection: ControlSelection,
) -> Result<Synthesis, SynthesisError> {
    let lists = accumulate(table, selection)?;
    Ok(Synthesis {
        circuit: GateListBuilder::merge(lists.input, lists.output),
        statistics: lists.statistics,
    })
}

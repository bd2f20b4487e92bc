// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input transformation.
//!
//! For each value `i` in order, finds the row that outputs `i` and rewrites its
//! input side until it reads `i`. Rows keep their positions; only the input
//! column changes. The recorded gates already form the circuit in application
//! order.

use crate::errors::SynthesisError;
use crate::synthesis::builder::GateListBuilder;
use crate::synthesis::controls::ControlSelection;
use crate::synthesis::pass::Pass;
use crate::synthesis::Synthesis;
use crate::table::TruthTable;

/// Synthesize `table` by input transformation.
pub fn synthesize(
    table: &TruthTable,
    selection: ControlSelection,
) -> Result<Synthesis, SynthesisError> {
    let mut pass = Pass::new(table, selection);
    let mut gates = GateListBuilder::new(table.width());

    for value in 0..pass.len() as u32 {
        pass.input_step(value, &mut gates)?;
    }

    let statistics = pass.finish()?;
    Ok(Synthesis {
        circuit: gates.into_forward(),
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Violation;

    fn run(width: usize, outputs: Vec<u32>) -> Result<Synthesis, SynthesisError> {
        synthesize(
            &TruthTable::from_outputs(width, outputs).unwrap(),
            ControlSelection::Reference,
        )
    }

    #[test]
    fn test_not_gate() {
        let synthesis = run(1, vec![1, 0]).unwrap();
        assert_eq!(synthesis.circuit.to_string(), "t1 a\n");
    }

    #[test]
    fn test_swap_realized() {
        let synthesis = run(2, vec![0, 2, 1, 3]).unwrap();
        assert_eq!(synthesis.circuit.permutation(), vec![0, 2, 1, 3]);
        assert!((2..=3).contains(&synthesis.circuit.len()));
    }

    #[test]
    fn test_rotation_realized() {
        let outputs = vec![1, 2, 3, 4, 5, 6, 7, 0];
        let synthesis = run(3, outputs.clone()).unwrap();
        assert_eq!(synthesis.circuit.permutation(), outputs);
    }

    #[test]
    fn test_missing_output() {
        let err = run(2, vec![0, 1, 1, 3]).unwrap_err();
        assert_eq!(
            err,
            SynthesisError::NotReversible(Violation::MissingOutput { value: 2 })
        );
    }
}

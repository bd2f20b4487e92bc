// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use revsynth::circuit::Role;
use revsynth::{Circuit, TruthTable};

/// Table of `width` lines from its output column.
pub fn table(width: usize, outputs: &[u32]) -> TruthTable {
    TruthTable::from_outputs(width, outputs.to_vec()).unwrap()
}

/// Check the circuit computes `table` on every input.
pub fn assert_realizes(circuit: &Circuit, table: &TruthTable) {
    assert_eq!(circuit.width(), table.width());
    assert_eq!(
        circuit.permutation(),
        table.outputs(),
        "circuit:\n{}",
        circuit
    );
}

/// Check every gate has one target and controls on other lines only.
pub fn assert_well_formed(circuit: &Circuit) {
    for gate in circuit {
        let roles = gate.roles();
        assert_eq!(roles.len(), circuit.width());
        assert_eq!(roles.iter().filter(|&&r| r == Role::Target).count(), 1);
        assert!(!gate.controls().contains(gate.target()));
        assert_eq!(gate.control_mask() & gate.target_mask(), 0);
    }
}

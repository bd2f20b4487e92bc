// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gate list accumulation and final ordering.
//!
//! Gates are recorded in the order the table transformation discovers them.
//! How that order maps to the circuit depends on the side they were applied to:
//!
//! - Output-side gates `g1 .. gk` satisfy `gk ∘ … ∘ g1 ∘ f = id`. Gates are
//!   self-inverse, so `f = g1 ∘ … ∘ gk` and the circuit applies them last
//!   recorded first: the list is reversed.
//! - Input-side gates satisfy `f ∘ g1 ∘ … ∘ gk = id`, so `f = gk ∘ … ∘ g1` and
//!   the circuit applies them in recorded order.
//! - A bidirectional run records both kinds; the input-side gates run first,
//!   followed by the reversed output-side gates.

use crate::circuit::{Circuit, Gate};
use crate::lines::{Line, LineSet};
use tracing::trace;

/// A growable list of gates recorded during one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateListBuilder {
    width: usize,
    gates: Vec<Gate>,
}

impl GateListBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            gates: Vec::new(),
        }
    }

    /// Record a gate.
    ///
    /// # Panics
    ///
    /// Panics if `controls` contains `target` or a line outside the width.
    pub fn push(&mut self, target: Line, controls: LineSet) -> Gate {
        let gate = Gate::new(self.width, target, controls);
        trace!(gate = %gate, index = self.gates.len(), "recorded gate");
        self.gates.push(gate);
        gate
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates in recorded order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The circuit applying the gates in recorded order.
    pub fn into_forward(self) -> Circuit {
        Circuit::new(self.width, self.gates)
    }

    /// The circuit applying the gates last recorded first.
    pub fn into_reversed(mut self) -> Circuit {
        self.gates.reverse();
        Circuit::new(self.width, self.gates)
    }

    /// The circuit `input ++ reverse(output)`.
    ///
    /// # Panics
    ///
    /// Panics if the two lists have different widths.
    pub fn merge(input: Self, output: Self) -> Circuit {
        assert_eq!(input.width, output.width, "merging gate lists of different widths");
        let mut gates = input.gates;
        gates.extend(output.gates.into_iter().rev());
        Circuit::new(input.width, gates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(targets: &[u8]) -> GateListBuilder {
        let mut builder = GateListBuilder::new(3);
        for &target in targets {
            builder.push(Line::new(target), LineSet::empty());
        }
        builder
    }

    fn targets(circuit: &Circuit) -> Vec<u8> {
        circuit.iter().map(|gate| gate.target().value()).collect()
    }

    #[test]
    fn test_push() {
        let mut list = GateListBuilder::new(2);
        assert!(list.is_empty());
        let gate = list.push(Line::new(1), LineSet::from_bits(0b01));
        assert_eq!(gate.to_string(), "t2 a b");
        assert_eq!(list.len(), 1);
        assert_eq!(list.gates(), &[gate]);
    }

    #[test]
    #[should_panic(expected = "Invalid gate")]
    fn test_push_rejects_control_on_target() {
        GateListBuilder::new(2).push(Line::new(0), LineSet::from_bits(0b01));
    }

    #[test]
    fn test_forward_and_reversed() {
        assert_eq!(targets(&builder(&[0, 1, 2]).into_forward()), vec![0, 1, 2]);
        assert_eq!(targets(&builder(&[0, 1, 2]).into_reversed()), vec![2, 1, 0]);
        assert!(GateListBuilder::new(3).into_reversed().is_empty());
    }

    #[test]
    fn test_merge() {
        let merged = GateListBuilder::merge(builder(&[0, 1]), builder(&[2, 1, 0]));
        assert_eq!(targets(&merged), vec![0, 1, 0, 1, 2]);

        let only_output = GateListBuilder::merge(builder(&[]), builder(&[1, 2]));
        assert_eq!(targets(&only_output), vec![2, 1]);
    }
}

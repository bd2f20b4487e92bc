// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reversible circuits built from Toffoli gates.
//!
//! A [`Circuit`] is an ordered gate sequence over a fixed number of lines.
//! Applying it to a value folds the gates left to right, so the first gate in
//! the list acts first. Synthesized circuits map every input `i` to `f(i)`.

pub mod gate;
pub mod render;

pub use gate::{Gate, Role};

use crate::lines::row_count;
use serde::Serialize;
use std::fmt;

/// An immutable sequence of gates over `width` lines.
///
/// Serializes as `{"width": n, "gates": [[role, ...], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Circuit {
    width: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create a circuit from gates in application order.
    ///
    /// # Panics
    ///
    /// Panics if a gate spans a different number of lines than `width`.
    pub fn new(width: usize, gates: Vec<Gate>) -> Self {
        assert!(
            gates.iter().all(|gate| gate.width() == width),
            "Circuit over {} lines given a gate of another width",
            width
        );
        Self { width, gates }
    }

    /// The empty circuit, which realizes the identity.
    pub fn identity(width: usize) -> Self {
        Self {
            width,
            gates: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Total number of control connections over all gates.
    pub fn control_count(&self) -> usize {
        self.gates.iter().map(|gate| gate.controls().len()).sum()
    }

    /// Push a value through every gate, first gate first.
    pub fn apply(&self, value: u32) -> u32 {
        self.gates.iter().fold(value, |value, gate| gate.apply(value))
    }

    /// The function the circuit realizes, as packed outputs in input order.
    pub fn permutation(&self) -> Vec<u32> {
        (0..row_count(self.width) as u32)
            .map(|input| self.apply(input))
            .collect()
    }

    /// The same gates in reverse order, which realizes the inverse function.
    pub fn inverse(&self) -> Self {
        Self {
            width: self.width,
            gates: self.gates.iter().rev().copied().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

impl fmt::Display for Circuit {
    /// One gate per line in `t{k}` notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gate in &self.gates {
            writeln!(f, "{}", gate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{Line, LineSet};

    fn cnot(width: usize, control: u8, target: u8) -> Gate {
        Gate::new(
            width,
            Line::new(target),
            LineSet::from_bits(Line::new(control).mask()),
        )
    }

    fn swap() -> Circuit {
        Circuit::new(2, vec![cnot(2, 1, 0), cnot(2, 0, 1), cnot(2, 1, 0)])
    }

    #[test]
    fn test_identity_circuit() {
        let circuit = Circuit::identity(3);
        assert!(circuit.is_empty());
        assert_eq!(circuit.permutation(), (0..8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_apply_folds_left_to_right() {
        // CNOT a->b then NOT a: 01 -> 11 -> 10
        let circuit = Circuit::new(
            2,
            vec![cnot(2, 0, 1), Gate::new(2, Line::new(0), LineSet::empty())],
        );
        assert_eq!(circuit.apply(0b01), 0b10);
        // Reversed order: 01 -> 00 -> 00
        assert_eq!(circuit.inverse().apply(0b01), 0b00);
    }

    #[test]
    fn test_swap_permutation() {
        let circuit = swap();
        assert_eq!(circuit.permutation(), vec![0, 2, 1, 3]);
        assert_eq!(circuit.control_count(), 3);
        assert_eq!(circuit.to_string(), "t2 b a\nt2 a b\nt2 b a\n");
    }

    #[test]
    fn test_inverse_undoes() {
        let circuit = Circuit::new(
            3,
            vec![
                Gate::new(3, Line::new(2), LineSet::from_bits(0b011)),
                cnot(3, 2, 0),
                Gate::new(3, Line::new(1), LineSet::empty()),
            ],
        );
        let inverse = circuit.inverse();
        for value in 0..8 {
            assert_eq!(inverse.apply(circuit.apply(value)), value);
        }
    }

    #[test]
    #[should_panic(expected = "given a gate of another width")]
    fn test_width_mismatch() {
        Circuit::new(3, vec![cnot(2, 0, 1)]);
    }

    #[test]
    fn test_serialize() {
        let circuit = Circuit::new(2, vec![cnot(2, 0, 1)]);
        let json = serde_json::to_string(&circuit).unwrap();
        assert_eq!(json, r#"{"width":2,"gates":[["control","target"]]}"#);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multiple-control Toffoli gates.

use crate::lines::{Line, LineSet};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// The part a line plays in a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    None,
    Control,
    Target,
}

/// A single-target Toffoli gate over `width` lines.
///
/// Applying the gate to a value flips the target bit when every control bit is
/// set. With no controls it is a NOT gate, with one a CNOT.
///
/// # Examples
///
/// ```
/// use revsynth::circuit::{Gate, Role};
/// use revsynth::lines::{Line, LineSet};
///
/// // CNOT controlled by line a, targeting line b.
/// let cnot = Gate::new(2, Line::new(1), LineSet::from_bits(0b01));
/// assert_eq!(cnot.apply(0b01), 0b11);
/// assert_eq!(cnot.apply(0b10), 0b10);
/// assert_eq!(cnot.roles(), vec![Role::Control, Role::Target]);
/// assert_eq!(cnot.to_string(), "t2 a b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gate {
    width: usize,
    target: Line,
    controls: LineSet,
}

impl Gate {
    /// Create a gate.
    ///
    /// # Panics
    ///
    /// Panics if the target is a control, or if any line is outside `0..width`.
    pub fn new(width: usize, target: Line, controls: LineSet) -> Self {
        Self::try_new(width, target, controls).unwrap_or_else(|| {
            panic!(
                "Invalid gate: target {} with controls {} on {} lines",
                target, controls, width
            )
        })
    }

    /// Try to create a gate, returning None if it would be malformed.
    pub fn try_new(width: usize, target: Line, controls: LineSet) -> Option<Self> {
        let lines = LineSet::full(width);
        if target.as_usize() >= width
            || controls.contains(target)
            || !controls.is_subset_of(lines)
        {
            return None;
        }
        Some(Self {
            width,
            target,
            controls,
        })
    }

    /// Number of lines the gate spans.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn target(&self) -> Line {
        self.target
    }

    pub fn controls(&self) -> LineSet {
        self.controls
    }

    pub fn target_mask(&self) -> u32 {
        self.target.mask()
    }

    pub fn control_mask(&self) -> u32 {
        self.controls.bits()
    }

    /// Role of a single line.
    pub fn role(&self, line: Line) -> Role {
        if line == self.target {
            Role::Target
        } else if self.controls.contains(line) {
            Role::Control
        } else {
            Role::None
        }
    }

    /// Role of every line, indexed by line.
    pub fn roles(&self) -> Vec<Role> {
        (0..self.width as u8).map(|i| self.role(Line::new(i))).collect()
    }

    /// Apply the gate to a packed value.
    pub fn apply(&self, value: u32) -> u32 {
        let controls = self.control_mask();
        if value & controls == controls {
            value ^ self.target_mask()
        } else {
            value
        }
    }
}

impl fmt::Display for Gate {
    /// Format as `t{k}` followed by the controls and then the target.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.controls.len() + 1)?;
        for line in self.controls.iter() {
            write!(f, " {}", line)?;
        }
        write!(f, " {}", self.target)
    }
}

impl Serialize for Gate {
    /// Serialized as the role vector.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.roles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_gate() {
        let not = Gate::new(1, Line::new(0), LineSet::empty());
        assert_eq!(not.apply(0), 1);
        assert_eq!(not.apply(1), 0);
        assert_eq!(not.roles(), vec![Role::Target]);
        assert_eq!(not.to_string(), "t1 a");
    }

    #[test]
    fn test_toffoli_gate() {
        let tof = Gate::new(3, Line::new(2), LineSet::from_bits(0b011));
        assert_eq!(tof.apply(0b011), 0b111);
        assert_eq!(tof.apply(0b111), 0b011);
        assert_eq!(tof.apply(0b101), 0b101);
        assert_eq!(tof.to_string(), "t3 a b c");
    }

    #[test]
    fn test_self_inverse() {
        let gate = Gate::new(4, Line::new(1), LineSet::from_bits(0b1001));
        for value in 0..16 {
            assert_eq!(gate.apply(gate.apply(value)), value);
        }
    }

    #[test]
    fn test_try_new_rejects_malformed() {
        assert!(Gate::try_new(2, Line::new(0), LineSet::from_bits(0b01)).is_none());
        assert!(Gate::try_new(2, Line::new(2), LineSet::empty()).is_none());
        assert!(Gate::try_new(2, Line::new(0), LineSet::from_bits(0b100)).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid gate")]
    fn test_new_panics_on_overlap() {
        Gate::new(2, Line::new(1), LineSet::from_bits(0b10));
    }

    #[test]
    fn test_roles() {
        let gate = Gate::new(4, Line::new(2), LineSet::from_bits(0b1001));
        assert_eq!(
            gate.roles(),
            vec![Role::Control, Role::None, Role::Target, Role::Control]
        );
        assert_eq!(gate.role(Line::new(1)), Role::None);
    }

    #[test]
    fn test_serialize_as_roles() {
        let gate = Gate::new(3, Line::new(0), LineSet::from_bits(0b100));
        let json = serde_json::to_string(&gate).unwrap();
        assert_eq!(json, r#"["target","none","control"]"#);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Control-line selection.
//!
//! To move a row's value `from` toward `to` by flipping one target bit, a gate
//! may only be controlled by lines that are set in `from` (so the row is
//! affected) and must not use the target line itself. The control mask must
//! also be at least `to`: every row already fixed holds a value below `to`, and
//! no value below the control mask can contain all of its bits, so the fixed
//! rows are left alone.

use crate::lines::weight;
use strum_macros::{Display as DisplayMacro, EnumIter, EnumString};

/// How the control set is picked among the valid candidates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, DisplayMacro, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ControlSelection {
    /// Keep the last candidate lighter than the first candidate.
    ///
    /// The comparison baseline is the weight of the first (largest) candidate
    /// and is never lowered, so this is not a running minimum. Circuits match
    /// the published tool gate for gate.
    #[default]
    Reference,

    /// Keep the first candidate of minimal weight.
    MinimumWeight,
}

/// Every valid control mask for flipping `target` in `from` on the way to `to`.
///
/// Candidates are the submasks `m` of `from` with `to <= m <= from` that do
/// not contain `target`, in descending numeric order. The list is empty when
/// `from < to`.
///
/// # Examples
///
/// ```
/// use revsynth::synthesis::controls::valid_control_lines;
///
/// // Clear bit 1 of 0b011 heading for 0b001: only line a may control.
/// assert_eq!(valid_control_lines(0b010, 0b011, 0b001), vec![0b001]);
/// ```
pub fn valid_control_lines(target: u32, from: u32, to: u32) -> Vec<u32> {
    let mut candidates = Vec::new();
    let mut mask = from;
    // Submasks of `from`, largest first.
    while mask >= to {
        if mask & target == 0 {
            candidates.push(mask);
        }
        if mask == 0 {
            break;
        }
        mask = (mask - 1) & from;
    }
    candidates
}

/// Pick the control mask to use among `candidates`, or None if there are none.
pub fn best_control_line(candidates: &[u32], selection: ControlSelection) -> Option<u32> {
    let (&first, rest) = candidates.split_first()?;
    let mut best = first;
    match selection {
        ControlSelection::Reference => {
            let baseline = weight(first);
            for &candidate in rest {
                if weight(candidate) < baseline {
                    best = candidate;
                }
            }
        }
        ControlSelection::MinimumWeight => {
            for &candidate in rest {
                if weight(candidate) < weight(best) {
                    best = candidate;
                }
            }
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    /// Literal reading of the candidate definition: scan the range downward.
    fn by_range(target: u32, from: u32, to: u32) -> Vec<u32> {
        if from < to {
            return Vec::new();
        }
        (to..=from)
            .rev()
            .filter(|&m| m & target == 0 && from & m == m)
            .collect()
    }

    #[test]
    fn test_matches_range_scan() {
        for target in (0..4).map(|bit| 1u32 << bit) {
            for from in 0..16 {
                for to in 0..16 {
                    assert_eq!(
                        valid_control_lines(target, from, to),
                        by_range(target, from, to),
                        "target={target:#b} from={from:#b} to={to:#b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_when_from_below_to() {
        assert!(valid_control_lines(0b01, 0b01, 0b10).is_empty());
    }

    #[test]
    fn test_zero_is_a_candidate() {
        // Clearing line a of value 1 heading for 0: no controls at all.
        assert_eq!(valid_control_lines(0b1, 0b1, 0), vec![0]);
    }

    #[test]
    fn test_excludes_target_line() {
        let candidates = valid_control_lines(0b100, 0b111, 0b001);
        assert_eq!(candidates, vec![0b011, 0b010, 0b001]);
    }

    #[test]
    fn test_best_empty() {
        for selection in ControlSelection::iter() {
            assert_eq!(best_control_line(&[], selection), None);
        }
    }

    #[test]
    fn test_reference_keeps_last_below_first() {
        // Weights 3, 1, 2: the baseline stays at 3, so the weight-2 mask wins.
        let candidates = [0b111, 0b001, 0b110];
        assert_eq!(
            best_control_line(&candidates, ControlSelection::Reference),
            Some(0b110)
        );
        assert_eq!(
            best_control_line(&candidates, ControlSelection::MinimumWeight),
            Some(0b001)
        );
    }

    #[test]
    fn test_selections_on_real_candidates() {
        let candidates = valid_control_lines(0b1000, 0b0111, 0b0001);
        assert_eq!(candidates, vec![7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(
            best_control_line(&candidates, ControlSelection::Reference),
            Some(0b001)
        );
        assert_eq!(
            best_control_line(&candidates, ControlSelection::MinimumWeight),
            Some(0b100)
        );
    }

    #[test]
    fn test_single_candidate() {
        for selection in ControlSelection::iter() {
            assert_eq!(best_control_line(&[0b10], selection), Some(0b10));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(ControlSelection::MinimumWeight.to_string(), "minimum-weight");
        assert_eq!(
            ControlSelection::from_str("reference").unwrap(),
            ControlSelection::Reference
        );
        assert!(ControlSelection::from_str("cheapest").is_err());
    }
}

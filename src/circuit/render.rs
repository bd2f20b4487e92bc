// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text diagrams of circuits.
//!
//! Each circuit line is drawn as one row, line `a` at the top. Every gate takes
//! one column: `●` marks a control, `⊕` the target, and `┼` a line the gate's
//! vertical wire passes over without touching.
//!
//! ```text
//! a ──●──⊕── a'
//! b ──⊕──●── b'
//! ```

use crate::circuit::{Circuit, Gate, Role};
use crate::lines::Line;

const WIRE: char = '─';
const CONTROL: char = '●';
const TARGET: char = '⊕';
const CROSSING: char = '┼';

/// Draw a circuit, one text row per line, each row ending in a newline.
pub fn diagram(circuit: &Circuit) -> String {
    let mut out = String::new();
    for index in 0..circuit.width() {
        let line = Line::new(index as u8);
        out.push(line.to_char());
        out.push(' ');
        out.push(WIRE);
        for gate in circuit {
            out.push(WIRE);
            out.push(symbol(gate, line));
            out.push(WIRE);
        }
        out.push(WIRE);
        out.push(' ');
        out.push(line.to_char());
        out.push('\'');
        out.push('\n');
    }
    out
}

/// The symbol a gate draws on one line.
fn symbol(gate: &Gate, line: Line) -> char {
    match gate.role(line) {
        Role::Control => CONTROL,
        Role::Target => TARGET,
        Role::None => {
            let mut involved = gate.controls();
            involved.insert(gate.target());
            match (involved.first(), involved.last()) {
                (Some(low), Some(high)) if low < line && line < high => CROSSING,
                _ => WIRE,
            }
        }
    }
}

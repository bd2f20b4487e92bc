// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: read a truth table, synthesize, print the circuit.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use revsynth::circuit::render;
use revsynth::lines::MAX_LINES;
use revsynth::table::spec_file::{parse_rows, read_spec};
use revsynth::{ControlSelection, Strategy, SynthesisConfig, Synthesizer, TruthTable};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "revsynth")]
#[command(about = "Transformation-based synthesis of reversible Toffoli circuits")]
#[command(version)]
struct Cli {
    /// Spec file: the line count, then 2^n rows of n bits
    #[arg(required_unless_present = "rows")]
    file: Option<PathBuf>,

    /// Truth table rows given inline, e.g. 00,10,01,11
    #[arg(long, value_delimiter = ',', conflicts_with = "file")]
    rows: Vec<String>,

    /// Synthesis algorithm: output, input or bidirectional
    #[arg(short, long, default_value_t = Strategy::Output)]
    strategy: Strategy,

    /// Control-line selection: reference or minimum-weight
    #[arg(long, default_value_t = ControlSelection::Reference)]
    selection: ControlSelection,

    /// Reject tables wider than this
    #[arg(long, default_value_t = MAX_LINES)]
    max_lines: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Diagram)]
    format: Format,

    /// Print synthesis counters to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Text circuit diagram
    Diagram,
    /// One gate per line in t{k} notation
    Gates,
    /// Role vectors as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let table = load_table(&cli)?;
    let config = SynthesisConfig::default()
        .with_strategy(cli.strategy)
        .with_selection(cli.selection)
        .with_max_lines(cli.max_lines);
    let synthesis = Synthesizer::new(config)
        .run(&table)
        .with_context(|| format!("{} synthesis failed", cli.strategy))?;

    match cli.format {
        Format::Diagram => print!("{}", render::diagram(&synthesis.circuit)),
        Format::Gates => print!("{}", synthesis.circuit),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&synthesis.circuit)
                .context("could not serialize circuit")?
        ),
    }

    if cli.stats {
        eprintln!(
            "gates={} controls={} {}",
            synthesis.circuit.len(),
            synthesis.circuit.control_count(),
            synthesis.statistics
        );
    }
    Ok(())
}

fn load_table(cli: &Cli) -> Result<TruthTable> {
    match &cli.file {
        Some(path) => read_spec(path).with_context(|| format!("reading {}", path.display())),
        None => parse_rows(cli.rows.as_slice()).context("parsing --rows"),
    }
}

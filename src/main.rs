//! Wiresim - Wiring Schematic Power-Flow Simulator
//!
//! Loads a circuit description from JSON, applies control-state overrides
//! from the command line, and prints the simulation report as JSON.
//!
//! # Usage
//!
//! ```bash
//! wiresim circuit.json --set switch=true --set breaker=false
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wiresim_core::{circuit::Circuit, error::Result, Simulator};

/// Wiring schematic power-flow simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file (.json)
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Control-state override, e.g. --set switch=true (repeatable)
    #[arg(short, long = "set", value_name = "STATE=BOOL", value_parser = parse_override)]
    set: Vec<(String, bool)>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn parse_override(raw: &str) -> std::result::Result<(String, bool), String> {
    let (state, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected STATE=BOOL, got '{raw}'"))?;
    let value: bool = value
        .parse()
        .map_err(|_| format!("expected 'true' or 'false', got '{value}'"))?;
    Ok((state.to_string(), value))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load and validate the circuit
    let circuit = Circuit::from_json_file(&args.circuit_file)?;
    let simulator = Simulator::new(circuit)?;

    // Apply overrides and simulate
    let overrides: HashMap<String, bool> = args.set.into_iter().collect();
    let report = simulator.run(&overrides);

    let json = if args.compact {
        report.to_json()?
    } else {
        report.to_json_pretty()?
    };
    println!("{json}");

    Ok(())
}

//! CLI entry point for the Hanoi planner and sequence auditor.
//!
//! Usage:
//!   hanoi-sequencer solve <DISCS> [--format json|table] [--audit]
//!   hanoi-sequencer check <moves.json> --discs <N>
//!   hanoi-sequencer check --stdin --discs <N>
//!
//! `solve` prints the move sequence for the robot driver or simulator;
//! `check` replays an externally supplied sequence and prints an audit
//! report. Diagnostics go to stderr via `RUST_LOG`, keeping stdout
//! machine-parseable.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use hanoi_sequencer::{generate, validate, MoveRecord, ValidationIssue};

#[derive(Parser)]
#[command(name = "hanoi-sequencer")]
#[command(about = "Iterative Tower of Hanoi move planner and sequence auditor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Named-field JSON for the robot driver and simulator
    Json,
    /// Aligned text table for operators
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the minimal move sequence for a disc count
    Solve {
        /// Number of discs on the starting peg (bounded: physical
        /// execution time doubles per disc)
        #[arg(value_parser = clap::value_parser!(i64).range(1..=20))]
        discs: i64,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Re-validate the generated sequence before printing it
        #[arg(long)]
        audit: bool,
    },

    /// Replay a move sequence and report every inconsistency
    Check {
        /// Path to a JSON move sequence (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the move sequence from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Disc count the sequence claims to solve
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=20))]
        discs: i64,
    },
}

/// Output format for `solve`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    disc_count: i64,
    move_count: usize,
    moves: Vec<MoveRecord>,
}

/// Output format for `check`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    valid: bool,
    disc_count: i64,
    moves_checked: usize,
    issue_count: usize,
    issues: Vec<ValidationIssue>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            discs,
            format,
            audit,
        } => {
            let moves = match generate(discs) {
                Ok(moves) => moves,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if audit {
                let issues = validate(&moves, discs).expect("disc count already validated");
                if !issues.is_empty() {
                    eprintln!("Error: generated sequence failed its own audit:");
                    for issue in &issues {
                        eprintln!("  move {}: {}", issue.move_index, issue.detail);
                    }
                    std::process::exit(1);
                }
            }

            match format {
                OutputFormat::Json => {
                    let output = SolveOutput {
                        disc_count: discs,
                        move_count: moves.len(),
                        moves,
                    };
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                }
                OutputFormat::Table => print!("{}", render_table(&moves)),
            }
        }

        Commands::Check { file, stdin, discs } => {
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            let moves: Vec<MoveRecord> = match serde_json::from_str(&json_content) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("Error parsing move sequence JSON: {}", e);
                    std::process::exit(1);
                }
            };

            let issues = match validate(&moves, discs) {
                Ok(issues) => issues,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let output = CheckOutput {
                valid: issues.is_empty(),
                disc_count: discs,
                moves_checked: moves.len(),
                issue_count: issues.len(),
                issues,
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if output.valid {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

/// Render the sequence as an aligned table, one row per move.
fn render_table(moves: &[MoveRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6}{:<8}{:<13}{:<15}{}\n",
        "Move", "Origin", "Destination", "Origin Before", "Destination Before"
    ));
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for m in moves {
        out.push_str(&format!(
            "{:<6}{:<8}{:<13}{:<15}{}\n",
            m.index,
            m.origin.number(),
            m.destination.number(),
            m.origin_count_before,
            m.destination_count_before
        ));
    }
    out
}

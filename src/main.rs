use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use precedence::{parse_input, solve, Disposition};

#[derive(Parser)]
#[command(name = "precedence")]
#[command(about = "Validate and repair sequences against pairwise precedence rules")]
struct Cli {
    /// Input file; stdin when omitted. Rule lines `a|b`, a blank line, then
    /// comma-separated sequence lines.
    input: Option<PathBuf>,

    /// Emit the full per-sequence report as JSON instead of the totals.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let input = parse_input(&text)?;
    info!(
        rules = input.rules.len(),
        sequences = input.sequences.len(),
        "input parsed"
    );

    let report = solve(input.rules, input.sequences)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for outcome in &report.outcomes {
            if let Disposition::Failed { error } = &outcome.disposition {
                eprintln!("sequence {:?} failed: {error}", outcome.sequence);
            }
        }
        println!("already ordered: {}", report.already_ordered_total);
        println!("corrected:       {}", report.corrected_total);
    }

    Ok(if report.failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

//! Shelf packing CLI

mod logging;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use shelfpack_codec::{self as codec, CompareResponse, PackOutcome, PackRequest, PackResponse};
use shelfpack_core::PackingSummary;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "shelfpack")]
#[command(about = "Best-fit 3D shelf packing with resumable state")]
#[command(version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (JSON); prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the request's items onto empty shelves
    Pack {
        /// Path to the JSON request
        request: PathBuf,

        /// Write only the packing state, ready to be used as `existing_state`
        #[arg(long)]
        state_only: bool,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Place the request's items around its `existing_state`
    Resume {
        /// Path to the JSON request
        request: PathBuf,

        /// Write only the packing state, ready to be used as `existing_state`
        #[arg(long)]
        state_only: bool,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Compare a full repack with an incremental run of the request
    Compare {
        /// Path to the JSON request
        request: PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Print metrics of a persisted packing state
    Summary {
        /// Path to the JSON state
        state: PathBuf,

        /// Print the metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Pack {
            request,
            state_only,
            out,
        } => {
            let request = read_request(&request)?;
            let outcome = codec::pack(&request)?;
            write_outcome(&outcome, state_only, &out)?;
        }

        Commands::Resume {
            request,
            state_only,
            out,
        } => {
            let request = read_request(&request)?;
            if request.existing_state.is_none() {
                log::warn!("Request has no existing_state; packing onto empty shelves");
            }
            let outcome = codec::pack_incremental(&request)?;
            write_outcome(&outcome, state_only, &out)?;
        }

        Commands::Compare { request, out } => {
            let request = read_request(&request)?;
            let run = codec::compare(&request)?;
            write_json(&CompareResponse::success(&run), &out)?;

            if out.output.is_some() {
                let c = &run.comparison;
                println!("\nComparison:");
                println!("{:-<60}", "");
                for (name, report) in [("full", &c.full), ("incremental", &c.incremental)] {
                    println!(
                        "  {:<12} free={:<12.1} util={:.1}% unplaced={}",
                        name, report.free_volume, report.utilization_pct, report.unplaced_count
                    );
                }
                println!("  better: {:?}", c.better_method);
            }
        }

        Commands::Summary { state, json } => {
            let snapshot = codec::read_state(&state)
                .with_context(|| format!("Failed to read state from {}", state.display()))?;
            let summary = codec::summarize(snapshot)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}

fn read_request(path: &Path) -> anyhow::Result<PackRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid request in {}", path.display()))
}

fn write_outcome(outcome: &PackOutcome, state_only: bool, out: &OutputArgs) -> anyhow::Result<()> {
    if state_only {
        write_json(&codec::encode(&outcome.result), out)?;
    } else {
        write_json(&PackResponse::success(outcome), out)?;
    }

    if out.output.is_some() {
        print_summary(&outcome.result.summary());
    }
    Ok(())
}

fn write_json<T: Serialize>(value: &T, out: &OutputArgs) -> anyhow::Result<()> {
    let json = if out.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match &out.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Results saved to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn print_summary(summary: &PackingSummary) {
    println!("\nPacking Summary:");
    println!("{:-<60}", "");
    println!("  Shelves:      {}", summary.shelf_count);
    println!("  Placed:       {}", summary.placed_count);
    println!("  Unplaced:     {}", summary.unplaced_count);
    println!("  Capacity:     {:.1}", summary.capacity_volume);
    println!("  Free volume:  {:.1}", summary.free_volume);
    println!("  Utilization:  {:.1}%", summary.utilization_pct);
}

//! `quorum` CLI — analyze a normalized scheduling-poll grid from the command line.
//!
//! The input is the normalized schedule JSON produced by a poll fetcher
//! (slot grid plus per-slot availability); this binary only analyzes it.
//!
//! ## Usage
//!
//! ```sh
//! # Common windows for everyone in the poll (schedule JSON on stdin)
//! quorum windows < poll.json
//!
//! # Windows for a selection, at least 90 minutes long
//! quorum windows -i poll.json -p Ana,Ben,Cleo --min-duration 90
//!
//! # Who blocks the most common time
//! quorum blockers -i poll.json -p Ana,Ben,Cleo
//!
//! # Fallbacks with up to two people sitting out
//! quorum alternatives -i poll.json -p Ana,Ben,Cleo --max-missing 2
//!
//! # Full report: windows if any, otherwise blockers plus alternatives
//! quorum report -i poll.json --json
//! ```

use std::collections::BTreeMap;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use quorum_engine::{
    analyze, find_alternatives, find_blockers, grouped_windows, Alternative, Blocker, Schedule,
};

#[derive(Parser)]
#[command(
    name = "quorum",
    version,
    about = "Find common availability in group scheduling polls"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selection {
    /// Normalized schedule JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Comma-separated participant names (defaults to everyone in the poll)
    #[arg(short, long)]
    participants: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print windows where the whole selection is available
    Windows {
        #[command(flatten)]
        selection: Selection,

        /// Drop windows shorter than this many minutes
        #[arg(long, default_value_t = 60)]
        min_duration: u32,
    },
    /// Print fallback windows with up to N participants excluded
    Alternatives {
        #[command(flatten)]
        selection: Selection,

        /// Drop windows shorter than this many minutes
        #[arg(long, default_value_t = 60)]
        min_duration: u32,

        /// Maximum number of participants to exclude
        #[arg(long, default_value_t = 1)]
        max_missing: usize,
    },
    /// Rank participants by how much common time they block
    Blockers {
        #[command(flatten)]
        selection: Selection,
    },
    /// Windows if any; otherwise blockers plus alternatives
    Report {
        #[command(flatten)]
        selection: Selection,

        /// Drop windows shorter than this many minutes
        #[arg(long, default_value_t = 60)]
        min_duration: u32,

        /// Maximum number of participants to exclude in alternatives
        #[arg(long, default_value_t = 1)]
        max_missing: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|level| level.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::WARN),
        )
        .with_target(false)
        .init();

    match Cli::parse().command {
        Commands::Windows {
            selection,
            min_duration,
        } => {
            let (schedule, participants) = load(&selection)?;
            let windows = grouped_windows(&schedule, &participants, min_duration);

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("No common window of at least {} minutes.", min_duration);
            } else {
                print_windows(&windows, "");
            }
        }
        Commands::Alternatives {
            selection,
            min_duration,
            max_missing,
        } => {
            let (schedule, participants) = load(&selection)?;
            let alternatives =
                find_alternatives(&schedule, &participants, max_missing, min_duration);

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&alternatives)?);
            } else if alternatives.is_empty() {
                println!(
                    "No viable alternative with up to {} participant(s) excluded.",
                    max_missing
                );
            } else {
                print_alternatives(&alternatives);
            }
        }
        Commands::Blockers { selection } => {
            let (schedule, participants) = load(&selection)?;
            let blockers = find_blockers(&schedule, &participants);

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&blockers)?);
            } else if blockers.is_empty() {
                println!("No single participant is blocking additional time.");
            } else {
                print_blockers(&blockers);
            }
        }
        Commands::Report {
            selection,
            min_duration,
            max_missing,
        } => {
            let (schedule, participants) = load(&selection)?;
            let analysis = analyze(&schedule, &participants, min_duration, max_missing);

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else if !analysis.windows.is_empty() {
                println!(
                    "All {} participants can meet:",
                    analysis.participants.len()
                );
                print_windows(&analysis.windows, "");
            } else {
                println!("No common window of at least {} minutes.", min_duration);

                println!();
                println!("Blockers:");
                if analysis.blockers.is_empty() {
                    println!("  (none)");
                } else {
                    print_blockers(&analysis.blockers);
                }

                println!();
                println!("Alternatives (up to {} excluded):", max_missing);
                if analysis.alternatives.is_empty() {
                    println!("  (none)");
                } else {
                    print_alternatives(&analysis.alternatives);
                }
            }
        }
    }

    Ok(())
}

/// Load the schedule and resolve the participant selection.
fn load(selection: &Selection) -> Result<(Schedule, Vec<String>)> {
    let json = read_input(selection.input.as_deref())?;
    let schedule = Schedule::from_json(&json).context("failed to load schedule")?;

    let participants = match selection.participants.as_deref() {
        Some(raw) => {
            let names: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                bail!("--participants must name at least one participant");
            }
            names
        }
        None => schedule.participants.clone(),
    };

    if participants.is_empty() {
        bail!("schedule has no participants");
    }

    Ok((schedule, participants))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_windows(windows: &BTreeMap<String, Vec<String>>, indent: &str) {
    for (date, ranges) in windows {
        println!("{}{}", indent, date);
        for range in ranges {
            println!("{}  {}", indent, range);
        }
    }
}

fn print_blockers(blockers: &[Blocker]) {
    for blocker in blockers {
        println!(
            "  {}: +{} slot(s) if excluded",
            blocker.name, blocker.slots_gained
        );
    }
}

fn print_alternatives(alternatives: &[Alternative]) {
    for alternative in alternatives {
        println!("  {}", alternative.label);
        print_windows(&alternative.windows, "    ");
    }
}

//! `callsheet` CLI — cast and crew availability from a roster file.
//!
//! ## Usage
//!
//! ```sh
//! # Full availability summary as JSON (stdin → stdout)
//! cat roster.json | callsheet summary
//!
//! # Pin "today" for a reproducible report, pretty-printed, to a file
//! callsheet --today 2025-05-01 summary -i roster.json -o summary.json --pretty
//!
//! # Who is free on a given day
//! callsheet who -i roster.json --date 2025-06-03
//!
//! # Check a roster for blank names or malformed dates
//! callsheet validate -i roster.json
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use anyhow::{anyhow, Context, Result};
use callsheet_engine::{
    available_members, parse_iso_date, parse_roster, summarize, CallSheetEntry, Clock,
    FixedClock, SystemClock,
};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "callsheet",
    version,
    about = "Call sheet availability: common shoot days, best day, consecutive windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat this date (YYYY-MM-DD) as today instead of reading the system clock
    #[arg(long, global = true, env = "CALLSHEET_TODAY")]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-date counts, common dates, best date, and consecutive ranges
    Summary {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List everyone available on a date
    Who {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// The date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Validate a roster without computing anything
    Validate {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            input,
            output,
            pretty,
        } => {
            let entries = load_roster(input.as_deref())?;
            let now = reference_now(cli.today.as_deref())?;
            info!(entries = entries.len(), %now, "summarizing call sheet");

            let summary = summarize(&entries, now);
            let json = if pretty {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Who { input, date } => {
            let entries = load_roster(input.as_deref())?;
            let date = parse_date_arg(&date)?;
            let members = available_members(&entries, date);
            if members.is_empty() {
                println!("Nobody is available on {}", date);
            } else {
                for member in members {
                    println!("{}", describe(member));
                }
            }
        }
        Commands::Validate { input } => {
            let entries = load_roster(input.as_deref())?;
            let with_dates = entries.iter().filter(|e| e.has_dates()).count();
            println!(
                "OK: {} entries ({} with available dates)",
                entries.len(),
                with_dates
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_roster(path: Option<&str>) -> Result<Vec<CallSheetEntry>> {
    let json = read_input(path)?;
    let entries = parse_roster(&json).context("Failed to load roster")?;
    debug!(entries = entries.len(), "roster loaded");
    Ok(entries)
}

/// Midnight of `--today` when given, otherwise the system clock.
fn reference_now(today: Option<&str>) -> Result<NaiveDateTime> {
    match today {
        Some(raw) => Ok(FixedClock::on(parse_date_arg(raw)?).now()),
        None => Ok(SystemClock.now()),
    }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    parse_iso_date(raw).map_err(|reason| anyhow!("Invalid date '{}': {}", raw, reason))
}

fn describe(entry: &CallSheetEntry) -> String {
    match &entry.role {
        Some(role) => format!("{} ({})", entry.name, role),
        None => entry.name.clone(),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

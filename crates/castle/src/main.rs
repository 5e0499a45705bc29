//! Castle builder
//!
//! Interactive menu that adds rooms to the kingdom's castle and
//! describes it.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use castle_core::{Kingdom, Menu, MenuError};

/// Build a castle one room at a time
#[derive(Parser, Debug)]
#[command(name = "castle")]
#[command(author, version, about = "Castle builder - add rooms, then describe them", long_about = None)]
struct Args {
    /// Log filter written to stderr (e.g. debug, castle_core=trace).
    /// Falls back to RUST_LOG, then to "warn".
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    // The menu has no failure exit: a broken stdio stream ends the session
    // like end of input does.
    if let Err(err) = run() {
        tracing::error!(%err, "menu stopped");
    }
    ExitCode::SUCCESS
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), MenuError> {
    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let mut kingdom = Kingdom::lock();
    tracing::info!(rooms = kingdom.castle().len(), "menu started");

    Menu::new(&mut kingdom).run(stdin.lock(), &mut stdout)?;

    tracing::info!(rooms = kingdom.castle().len(), "menu finished");
    Ok(())
}

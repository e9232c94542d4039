//! NestKV command-line front end.
//!
//! Reads fixed-arity, whitespace-delimited commands one per line and
//! drives a [`nestkv_core::Store`]. With a readable file argument the
//! session runs in file mode; otherwise it reads interactively from
//! stdin. A one-line mode banner is printed before processing.

mod command;
mod session;

use clap::Parser;
use session::Session;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// NestKV transactional key/value session.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read commands from this file instead of stdin
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(core = nestkv_core::VERSION, "starting session");

    let mut session = Session::new(io::stdout().lock());

    match cli.input.as_deref().map(File::open) {
        Some(Ok(file)) => {
            println!("IN FILE MODE");
            session.run(BufReader::new(file))?;
        }
        Some(Err(err)) => {
            // Same fallback as an absent argument, with a notice.
            eprintln!("cannot read input file, starting interactive mode: {err}");
            println!("IN INTERACTIVE MODE");
            session.run(io::stdin().lock())?;
        }
        None => {
            println!("IN INTERACTIVE MODE");
            session.run(io::stdin().lock())?;
        }
    }

    Ok(())
}

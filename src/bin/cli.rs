//! cellstore CLI
//!
//! Runs text commands against an in-memory engine, one per line, from a
//! script file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use cellstore::{Config, PreconditionPolicy, QueryHandler};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// cellstore CLI
#[derive(Parser, Debug)]
#[command(name = "cellstore-cli")]
#[command(about = "Line-oriented shell over a timestamp-keyed tagged-cell store")]
#[command(version)]
struct Args {
    /// Script with one command per line (reads stdin when omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Panic on programmer errors (negative timestamp, NaN) instead of reporting them
    #[arg(long)]
    abort_on_programmer_error: bool,

    /// Slots reserved for each new row
    #[arg(short = 'c', long, default_value = "4")]
    row_capacity: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cellstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("cellstore CLI v{}", cellstore::VERSION);

    let policy = if args.abort_on_programmer_error {
        PreconditionPolicy::Abort
    } else {
        PreconditionPolicy::Propagate
    };

    let config = Config::builder()
        .row_capacity(args.row_capacity)
        .precondition_policy(policy)
        .build();

    let mut handler = QueryHandler::from_config(&config);

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => {
                tracing::info!("Running script: {}", path.display());
                Box::new(BufReader::new(file))
            }
            Err(e) => {
                tracing::error!("Failed to open script {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    for (index, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        };

        match handler.execute_line(&line) {
            Ok(Some(response)) => println!("{}", response),
            Ok(None) => {}
            Err(e) => eprintln!("line {}: {}", index + 1, e),
        }
    }
}

//! Strata CLI
//!
//! Command-line front end for ingesting line-oriented input into a chunk
//! list and inspecting it.
//!
//! # Commands
//!
//! - `count` - Ingest input and report records and chunks
//! - `tokens` - Print the unique tokens of one kind
//! - `stats` - Print list statistics
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strata_core::{TokenKind, DEFAULT_CHUNK_SIZE};
use tracing_subscriber::EnvFilter;

/// Strata command-line tools.
#[derive(Parser)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (reads stdin if omitted)
    #[arg(global = true, short, long)]
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Records per chunk
    #[arg(global = true, short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest input and report record and chunk counts
    Count {
        /// Drop empty lines
        #[arg(short, long)]
        skip_empty: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the sorted unique tokens of one kind
    Tokens {
        /// Token kind (ip, path, num, hash, word)
        #[arg(short, long, default_value_t = TokenKind::default())]
        kind: TokenKind,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print list statistics
    Stats {
        /// Also take a tokenized snapshot of this kind
        #[arg(short, long)]
        kind: Option<TokenKind>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout carries command output only.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = cli.input.as_deref();

    match cli.command {
        Commands::Count { skip_empty, format } => {
            commands::count::run(input, cli.chunk_size, skip_empty, &format)?;
        }
        Commands::Tokens { kind, format } => {
            commands::tokens::run(input, cli.chunk_size, kind, &format)?;
        }
        Commands::Stats { kind, format } => {
            commands::stats::run(input, cli.chunk_size, kind, &format)?;
        }
        Commands::Version => {
            println!("Strata CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Strata Core v{}", strata_core::VERSION);
        }
    }

    Ok(())
}

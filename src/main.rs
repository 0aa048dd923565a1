//! Command-line interface for sector-sync
//!
//! # Usage Examples
//!
//! ## Single script
//! ```bash
//! # DELETE, inserts, COMMIT and verification queries in one file
//! sector-sync script --input setores.csv --output import_setores.sql
//!
//! # PostgreSQL, keeping rows already in the table
//! sector-sync script --input setores.csv --output import.sql \
//!   --dialect postgresql --keep-existing
//! ```
//!
//! ## Batches
//! ```bash
//! # batch_001.sql, batch_002.sql, ... with 10 inserts each
//! sector-sync batches --input setores.csv --output-dir lotes/
//!
//! # Same, from a manifest written earlier
//! sector-sync batches --from-manifest comandos.json --output-dir lotes/
//! ```
//!
//! ## Manifest and resume
//! ```bash
//! sector-sync manifest --input setores.csv --output comandos.json
//! sector-sync checkpoint mark --checkpoint-file applied.json --from-manifest comandos.json
//! sector-sync checkpoint show --checkpoint-file applied.json
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress logs on stderr; the run
//! report is always printed to stdout.

use clap::{Parser, Subcommand};
use sector_sync::emit::{
    run_batches, run_manifest, run_script, BatchesArgs, ManifestArgs, ScriptArgs,
};
use sector_sync::resume::{run_checkpoint, CheckpointCommand};

#[derive(Parser)]
#[command(name = "sector-sync")]
#[command(about = "Generate SQL import scripts from a sector CSV export")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one import script (clear, insert, commit, verify)
    Script(ScriptArgs),

    /// Write one transactional file per fixed-size batch
    Batches(BatchesArgs),

    /// Write a JSON manifest of generated statements
    Manifest(ManifestArgs),

    /// Inspect or update the resume checkpoint
    Checkpoint {
        #[command(subcommand)]
        command: CheckpointCommand,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Script(args) => {
            run_script(args)?;
        }
        Commands::Batches(args) => {
            run_batches(args)?;
        }
        Commands::Manifest(args) => {
            run_manifest(args)?;
        }
        Commands::Checkpoint { command } => run_checkpoint(command)?,
    }

    Ok(())
}

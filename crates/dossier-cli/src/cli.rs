//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use dossier::Field;
use std::path::PathBuf;

/// Dossier: personal-record validation and sorting tool
#[derive(Parser)]
#[command(name = "dossier")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a record file and split it into valid and invalid records
    Validate {
        /// Path to the record file (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for valid records (default: <file>.valid.json)
        #[arg(long)]
        valid: Option<PathBuf>,

        /// Output path for invalid records (default: <file>.invalid.json)
        #[arg(long)]
        invalid: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Require national ids to be exactly 11 digits
        #[arg(long)]
        strict_national_id: bool,

        /// Don't show a progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Sort a validated record file by a numeric field
    Sort {
        /// Path to the validated record file (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field to sort by (age, weight, national_id, ...)
        #[arg(short, long, default_value = "age")]
        key: Field,

        /// Output path for sorted JSON (default: <file>.sorted.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for the sorted blob (default: <file>.sorted.bin)
        #[arg(short, long)]
        blob: Option<PathBuf>,
    },
}

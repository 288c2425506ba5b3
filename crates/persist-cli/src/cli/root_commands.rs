use clap::{Args, Subcommand};

use crate::cli::subcommands::{DayCommands, LogCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check an import file without touching the database.
    Validate(ValidateArgs),
    /// Validate and import a workout plan file.
    Import(ImportArgs),
    /// Read/write/delete round trip against the database.
    Probe,
    /// Delete all workout data.
    Wipe(WipeArgs),
    /// Print the JSON Schema of the import document.
    Schema,
    /// List imported programs, newest first.
    Programs,
    /// Inspect and complete a program day.
    Day {
        #[command(subcommand)]
        action: DayCommands,
    },
    /// Exercise logs.
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Path to the import file (.json).
    pub file: String,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to the import file (.json).
    pub file: String,
    /// Validate only; write nothing.
    #[arg(long)]
    pub dry_run: bool,
    /// Abort on the first failed write at any level.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct WipeArgs {
    /// Must be exactly "DELETE ALL WORKOUT DATA".
    #[arg(long)]
    pub confirm: String,
}

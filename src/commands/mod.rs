//! CLI command definitions and dispatch.

mod backup;
mod list;

use clap::{Parser, Subcommand};

/// modelpack — inventory and export locally cached Ollama models.
#[derive(Parser)]
#[command(name = "modelpack", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Export a model's manifest and blobs to a tar archive
    Backup(backup::BackupArgs),
    /// List models and versions present in the local store
    List(list::ListArgs),
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Backup(args) => backup::execute(args),
        Command::List(args) => list::execute(args),
    }
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::runner::Mode;

/// Top-level CLI parser for `simple-test`.
#[derive(Debug, Parser)]
#[command(
    name = "simple-test",
    version,
    about = "Run the SIMPLE compiler in one of its output modes"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands, one per tool mode.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token stream (`-s`).
    Scan(RunArgs),
    /// Print the concrete syntax tree (`-c`).
    Cst(RunArgs),
    /// Print the symbol table (`-t`).
    Table(RunArgs),
}

/// Arguments shared by every mode.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Source file to feed the tool.
    pub file: PathBuf,
    /// Stream the file through stdin instead of passing its path.
    #[arg(long)]
    pub stdin: bool,
    /// Print the command line to stderr before running it.
    #[arg(long)]
    pub show_command: bool,
}

impl Command {
    /// The tool mode this subcommand selects.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Scan(_) => Mode::Scan,
            Self::Cst(_) => Mode::Cst,
            Self::Table(_) => Mode::SymbolTable,
        }
    }

    /// The arguments given to this subcommand.
    #[must_use]
    pub const fn args(&self) -> &RunArgs {
        match self {
            Self::Scan(args) | Self::Cst(args) | Self::Table(args) => args,
        }
    }
}

//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod output;

pub use crate::config::OutputFormat;

/// FSA to regular expression translator
#[derive(Parser, Debug)]
#[command(name = "fsa2regex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config; RUST_LOG overrides both)
    #[arg(long, global = true, env = "FSA2REGEX_LOG")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an automaton and print its regular expression
    Convert {
        /// Input file (defaults to input.path from config)
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Only run the validation checks
    Validate {
        /// Input file (defaults to input.path from config)
        input: Option<PathBuf>,
    },

    /// Compare the automaton and its regular expression on all short words
    Verify {
        /// Input file (defaults to input.path from config)
        input: Option<PathBuf>,

        /// Longest word to check
        #[arg(long)]
        max_length: Option<usize>,
    },
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Convert {
            input,
            output,
            format,
        } => commands::convert::execute(input, output, format, &config),
        Commands::Validate { input } => commands::validate::execute(input, &config),
        Commands::Verify { input, max_length } => {
            commands::verify::execute(input, max_length, &config)
        }
    }
}

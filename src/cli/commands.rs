//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::{Config, Result};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Read the automaton description
fn read_input(path: &Path) -> Result<String> {
    tracing::debug!("Reading input from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {:?}", path))?;
    Ok(text)
}

/// Open the output sink: a file when given, stdout otherwise
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn input_path(input: Option<PathBuf>, config: &Config) -> PathBuf {
    input.unwrap_or_else(|| config.input.path.clone())
}

/// Convert command implementation
pub mod convert {
    use super::*;
    use crate::cli::{OutputFormat, output};

    /// Execute the convert command
    pub fn execute(
        input: Option<PathBuf>,
        output_path: Option<PathBuf>,
        format: Option<OutputFormat>,
        config: &Config,
    ) -> Result<()> {
        let input = input_path(input, config);
        let output_path = output_path.or_else(|| config.output.path.clone());
        let format = format.unwrap_or(config.output.format);

        let text = read_input(&input)?;
        let outcome: output::Outcome = crate::translate(&text);

        match &outcome {
            Ok((_, regex)) => tracing::info!("Synthesized expression of {} bytes", regex.len()),
            Err(err) => tracing::info!("Rejected with {}", err.code()),
        }

        let mut w = open_output(output_path.as_deref())?;
        match format {
            OutputFormat::Text => output::output_text(&mut w, &outcome)?,
            OutputFormat::Json => output::output_json(&mut w, &outcome)?,
            OutputFormat::Dot => output::output_dot(&mut w, &outcome)?,
        }
        w.flush()?;

        Ok(())
    }
}

/// Validate command implementation
pub mod validate {
    use super::*;
    use crate::{fsa, parser};

    /// Execute the validate command
    pub fn execute(input: Option<PathBuf>, config: &Config) -> Result<()> {
        let input = input_path(input, config);
        let text = read_input(&input)?;

        let mut w = open_output(config.output.path.as_deref())?;
        match parser::parse_input(&text).and_then(fsa::validate) {
            Ok(automaton) => writeln!(
                w,
                "FSA is valid ({}, {} states, {} transitions)",
                automaton.kind(),
                automaton.states().len(),
                automaton.transitions().len()
            )?,
            Err(err) => writeln!(w, "{}", err)?,
        }
        w.flush()?;

        Ok(())
    }
}

/// Verify command implementation
pub mod verify {
    use super::*;
    use crate::cli::output;
    use crate::config::MAX_VERIFY_LENGTH;
    use crate::{ensure, kleene};

    /// Execute the verify command
    pub fn execute(input: Option<PathBuf>, max_length: Option<usize>, config: &Config) -> Result<()> {
        let input = input_path(input, config);
        let max_length = max_length.unwrap_or(config.verify.max_length);
        ensure!(
            max_length <= MAX_VERIFY_LENGTH,
            "--max-length must be at most {}",
            MAX_VERIFY_LENGTH
        );

        let text = read_input(&input)?;
        let mut w = open_output(config.output.path.as_deref())?;

        match crate::translate(&text) {
            Ok((automaton, regex)) => {
                let report = kleene::verify(&automaton, &regex, max_length)?;
                output::output_verification(&mut w, &report)?;
            }
            Err(err) => writeln!(w, "{}", err)?,
        }
        w.flush()?;

        Ok(())
    }
}

//! Parser module - input file lines to field lists
//!
//! The input is six `key=[value]` lines in a fixed order. This layer only
//! checks the shape of each line and splits the bracketed values; the
//! logical checks live in [`crate::fsa::validator`].

use crate::error::FsaError;

pub mod format;

pub use format::FIELD_KEYS;

/// Field lists exactly as written in the input, split on `,`.
///
/// Empty brackets yield a single empty string, so `initial=[]` is one blank
/// entry rather than no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAutomaton {
    pub kind: Vec<String>,
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub initial: Vec<String>,
    pub accepting: Vec<String>,
    pub transitions: Vec<String>,
}

/// Parse the whole input text.
pub fn parse_input(text: &str) -> Result<RawAutomaton, FsaError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    parse_lines(&lines)
}

/// Parse the input lines; one trailing empty line is tolerated.
pub fn parse_lines(lines: &[&str]) -> Result<RawAutomaton, FsaError> {
    let lines = match lines.split_last() {
        Some((last, rest)) if last.is_empty() => rest,
        _ => lines,
    };

    if lines.len() != FIELD_KEYS.len() {
        tracing::debug!("E1: expected {} lines, got {}", FIELD_KEYS.len(), lines.len());
        return Err(FsaError::Malformed);
    }

    if let Some(position) = (0..lines.len()).find(|&i| !format::line_matches(i, lines[i])) {
        tracing::debug!("E1: line {} ({}) is malformed", position + 1, FIELD_KEYS[position]);
        return Err(FsaError::Malformed);
    }

    let mut fields = lines.iter().map(|line| split_value(line));
    let mut next = || fields.next().ok_or(FsaError::Malformed);

    Ok(RawAutomaton {
        kind: next()?,
        states: next()?,
        alphabet: next()?,
        initial: next()?,
        accepting: next()?,
        transitions: next()?,
    })
}

/// `key=[a,b]` -> `["a", "b"]`
fn split_value(line: &str) -> Vec<String> {
    let value = line
        .split_once('=')
        .map(|(_, value)| value)
        .unwrap_or_default();
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    inner.split(',').map(str::to_string).collect()
}

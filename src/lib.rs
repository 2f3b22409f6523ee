//! FSA to regular expression translator
//!
//! Validates a textual finite-state automaton description and converts it to
//! an equivalent regular expression by state elimination.
//!
//! This library provides functionality for:
//! - Parsing the six-line `key=[value]` input format
//! - Validating the automaton (error codes E1-E7, first failure wins)
//! - Building the transition graph and checking reachability and determinism
//! - Synthesizing the expression with Kleene's construction
//! - Reading the expression back and comparing languages on bounded words
//!
//! ```
//! let input = "type=[deterministic]
//! states=[a]
//! alphabet=[x]
//! initial=[a]
//! accepting=[a]
//! transitions=[a>x>a]";
//! assert_eq!(
//!     fsa2regex::output_line(input),
//!     "((x|eps)(x|eps)*(x|eps)|(x|eps))"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fsa;
pub mod kleene;
pub mod parser;

pub use config::Config;
pub use error::{Error, FsaError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
///
/// Logs go to stderr so the result line on stdout stays clean.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Full pipeline: input text to the validated automaton and its regular
/// expression, or the first error code.
pub fn translate(input: &str) -> std::result::Result<(fsa::Automaton, String), FsaError> {
    let raw = parser::parse_input(input)?;
    let automaton = fsa::validate(raw)?;
    tracing::info!(
        states = automaton.states().len(),
        transitions = automaton.transitions().len(),
        "Automaton is valid"
    );
    let regex = kleene::to_regex(&automaton);
    Ok((automaton, regex))
}

/// Input text to regular expression, or the first error code.
pub fn convert(input: &str) -> std::result::Result<String, FsaError> {
    translate(input).map(|(_, regex)| regex)
}

/// The single line printed for an input: the expression or the error.
pub fn output_line(input: &str) -> String {
    convert(input).unwrap_or_else(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "fsa2regex");
    }

    #[test]
    fn test_translate_keeps_automaton() {
        let input = "type=[non-deterministic]
states=[a,b]
alphabet=[x]
initial=[a]
accepting=[b]
transitions=[a>x>b]";
        let (automaton, regex) = translate(input).unwrap();
        assert_eq!(automaton.initial(), "a");
        assert_eq!(automaton.transitions().len(), 1);
        assert_eq!(Ok(regex), convert(input));
    }

    #[test]
    fn test_disjoint_states_scenario() {
        let input = "type=[deterministic]
states=[a,b,c,d]
alphabet=[x]
initial=[a]
accepting=[b]
transitions=[a>x>b,c>x>d]";
        assert_eq!(output_line(input), "E6: Some states are disjoint");
    }

    #[test]
    fn test_empty_accepting_scenario() {
        // the graph is disjoint too, but E3 fires first
        let input = "type=[deterministic]
states=[a,b,c,d]
alphabet=[x]
initial=[a]
accepting=[]
transitions=[a>x>b,c>x>d]";
        assert_eq!(convert(input), Err(FsaError::NoAcceptingStates));
        assert_eq!(output_line(input), "E3: Set of accepting states is empty");
    }

    #[test]
    fn test_format_error_before_logic_error() {
        // bad state charset and an unknown initial state: E1, never E4
        let input = "type=[deterministic]
states=[a-1]
alphabet=[x]
initial=[q]
accepting=[a]
transitions=[a>x>a]";
        assert_eq!(output_line(input), "E1: Input file is malformed");
    }

    #[test]
    fn test_blank_initial() {
        let input = "type=[non-deterministic]
states=[a]
alphabet=[x]
initial=[]
accepting=[a]
transitions=[a>x>a]
";
        assert_eq!(output_line(input), "E2: Initial state is not defined");
    }

    #[test]
    fn test_unknown_accepting_state() {
        let input = "type=[non-deterministic]
states=[a,b]
alphabet=[x]
initial=[a]
accepting=[c]
transitions=[a>x>b]
";
        assert_eq!(output_line(input), "E4: A state 'c' is not in the set of states");
    }

    #[test]
    fn test_unknown_symbol() {
        let input = "type=[non-deterministic]
states=[a,b]
alphabet=[x]
initial=[a]
accepting=[b]
transitions=[a>x>b,b>y>a]
";
        assert_eq!(
            output_line(input),
            "E5: A transition 'y' is not represented in the alphabet"
        );
    }

    #[test]
    fn test_nondeterministic_dfa() {
        let input = "type=[deterministic]
states=[a,b]
alphabet=[x]
initial=[a]
accepting=[b]
transitions=[a>x>b,a>x>a]
";
        assert_eq!(output_line(input), "E7: FSA is non-deterministic");
    }
}

//! This module defines all error types used throughout the application.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The automaton description was rejected by one of the E1-E7 checks
    #[error(transparent)]
    Fsa(#[from] FsaError),

    /// A string could not be read back as an expression of the output dialect
    #[error("Expression error at offset {offset}: {message}")]
    Expression { offset: usize, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an expression error at the given byte offset
    pub fn expression(offset: usize, msg: impl Into<String>) -> Self {
        Self::Expression {
            offset,
            message: msg.into(),
        }
    }
}

/// Closed taxonomy of automaton validation failures.
///
/// Exactly one of these is surfaced per run; the `Display` output is the
/// line printed to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsaError {
    #[error("E1: Input file is malformed")]
    Malformed,

    #[error("E2: Initial state is not defined")]
    InitialUndefined,

    #[error("E3: Set of accepting states is empty")]
    NoAcceptingStates,

    #[error("E4: A state '{0}' is not in the set of states")]
    UnknownState(String),

    #[error("E5: A transition '{0}' is not represented in the alphabet")]
    UnknownSymbol(String),

    #[error("E6: Some states are disjoint")]
    Disjoint,

    #[error("E7: FSA is non-deterministic")]
    NonDeterministic,
}

impl FsaError {
    /// Short error code, `E1` through `E7`
    pub fn code(&self) -> &'static str {
        match self {
            FsaError::Malformed => "E1",
            FsaError::InitialUndefined => "E2",
            FsaError::NoAcceptingStates => "E3",
            FsaError::UnknownState(_) => "E4",
            FsaError::UnknownSymbol(_) => "E5",
            FsaError::Disjoint => "E6",
            FsaError::NonDeterministic => "E7",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::custom(format!("JSON error: {}", err))
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::expression(3, "unbalanced parenthesis");
        assert_eq!(
            err.to_string(),
            "Expression error at offset 3: unbalanced parenthesis"
        );
    }

    #[test]
    fn test_fsa_messages() {
        assert_eq!(FsaError::Malformed.to_string(), "E1: Input file is malformed");
        assert_eq!(
            FsaError::UnknownState("q9".into()).to_string(),
            "E4: A state 'q9' is not in the set of states"
        );
        assert_eq!(
            FsaError::UnknownSymbol("z".into()).to_string(),
            "E5: A transition 'z' is not represented in the alphabet"
        );
        assert_eq!(FsaError::NonDeterministic.code(), "E7");
    }

    #[test]
    fn test_fsa_error_is_transparent() {
        let err: Error = FsaError::Disjoint.into();
        assert_eq!(err.to_string(), "E6: Some states are disjoint");
        assert!(matches!(err, Error::Fsa(FsaError::Disjoint)));
    }

    #[test]
    fn test_error_macros() {
        fn check(limit: usize) -> Result<usize> {
            crate::ensure!(limit <= 3, "limit {} is above {}", limit, 3);
            Ok(limit)
        }
        assert_eq!(check(2).unwrap(), 2);
        let err = check(5).unwrap_err();
        assert!(matches!(&err, Error::Custom(msg) if msg == "limit 5 is above 3"));

        let err: Error = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error: "));
    }
}

//! Transition representation

use crate::error::FsaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A labeled transition `from>symbol>to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub symbol: String,
    pub to: String,
}

impl Transition {
    pub fn new(from: impl Into<String>, symbol: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

impl FromStr for Transition {
    type Err = FsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('>');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(symbol), Some(to), None)
                if [from, symbol, to].iter().all(|p| is_word(p)) =>
            {
                Ok(Transition::new(from, symbol, to))
            }
            _ => Err(FsaError::Malformed),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}>{}", self.from, self.symbol, self.to)
    }
}

/// `[A-Za-z0-9_]+`
pub(crate) fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

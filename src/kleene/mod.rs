//! Regular expression synthesis by state elimination (Kleene's construction)
//!
//! The output dialect is deliberately small:
//! - `|` alternation, `(...)` grouping, postfix `*`, juxtaposition for concatenation
//! - `eps` for the empty word, `{}` for the empty language
//! - symbols are written as-is (they are restricted to `[A-Za-z0-9_]+`)

pub mod expr;
pub mod table;
pub mod verify;

pub use expr::{Expr, Matcher};
pub use table::KleeneTable;
pub use verify::{Verification, verify};

use crate::fsa::Automaton;

/// Empty-word token
pub const EPSILON: &str = "eps";

/// Empty-language token
pub const EMPTY_LANGUAGE: &str = "{}";

/// Synthesize a regular expression for the language of `automaton`.
///
/// One expression per accepting state (sorted lexicographically), each
/// wrapped in parentheses and joined with `|`.
pub fn to_regex(automaton: &Automaton) -> String {
    let table = KleeneTable::build(automaton);
    let Some(start) = automaton.state_index(automaton.initial()) else {
        return EMPTY_LANGUAGE.to_string();
    };

    let parts: Vec<String> = automaton
        .sorted_accepting()
        .into_iter()
        .filter_map(|state| automaton.state_index(state))
        .filter_map(|end| table.paths(start, end))
        .map(|paths| format!("({})", paths))
        .collect();

    tracing::debug!(
        states = table.size(),
        accepting = parts.len(),
        "Assembled regular expression"
    );

    parts.join("|")
}

#[cfg(test)]
mod tests;

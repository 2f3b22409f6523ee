//! Automaton record

use super::Transition;
use crate::error::FsaError;
use crate::parser::RawAutomaton;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Declared kind of the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FsaType {
    Deterministic,
    NonDeterministic,
}

impl FsaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FsaType::Deterministic => "deterministic",
            FsaType::NonDeterministic => "non-deterministic",
        }
    }
}

impl FromStr for FsaType {
    type Err = FsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deterministic" => Ok(FsaType::Deterministic),
            "non-deterministic" => Ok(FsaType::NonDeterministic),
            _ => Err(FsaError::Malformed),
        }
    }
}

impl fmt::Display for FsaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated finite-state automaton.
///
/// Instances only exist after checks E1-E5 have passed, so every state
/// referenced by `initial`, `accepting` or a transition is declared and every
/// transition symbol belongs to the alphabet. The position of a state in
/// `states` is its index in the regex construction table.
#[derive(Debug, Clone)]
pub struct Automaton {
    kind: FsaType,
    states: Vec<String>,
    alphabet: Vec<String>,
    initial: String,
    accepting: Vec<String>,
    transitions: Vec<Transition>,

    /// State identifier -> declaration index
    index: HashMap<String, usize>,

    /// Outgoing `(symbol, target index)` pairs per source index, in declaration order
    delta: Vec<Vec<(String, usize)>>,
}

impl Automaton {
    /// Assemble a record from parts that have already been checked.
    pub(super) fn from_checked(
        kind: FsaType,
        states: Vec<String>,
        alphabet: Vec<String>,
        initial: String,
        accepting: Vec<String>,
        transitions: Vec<Transition>,
    ) -> Self {
        let index: HashMap<String, usize> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        let mut delta = vec![Vec::new(); states.len()];
        for t in &transitions {
            if let (Some(&from), Some(&to)) = (index.get(&t.from), index.get(&t.to)) {
                delta[from].push((t.symbol.clone(), to));
            }
        }

        Self {
            kind,
            states,
            alphabet,
            initial,
            accepting,
            transitions,
            index,
            delta,
        }
    }

    pub fn kind(&self) -> FsaType {
        self.kind
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn accepting(&self) -> &[String] {
        &self.accepting
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Declaration index of a state
    pub fn state_index(&self, state: &str) -> Option<usize> {
        self.index.get(state).copied()
    }

    /// Outgoing `(symbol, target index)` pairs of the state at `index`
    pub fn outgoing(&self, index: usize) -> &[(String, usize)] {
        self.delta.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Accepting states sorted lexicographically
    pub fn sorted_accepting(&self) -> Vec<&str> {
        let mut accepting: Vec<&str> = self.accepting.iter().map(String::as_str).collect();
        accepting.sort_unstable();
        accepting
    }

    /// Run the automaton on a word of alphabet symbols.
    ///
    /// Tracks the set of active states, so non-deterministic automata are
    /// handled as well.
    pub fn accepts<S: AsRef<str>>(&self, word: &[S]) -> bool {
        let Some(start) = self.state_index(&self.initial) else {
            return false;
        };

        let mut current = BTreeSet::from([start]);
        for symbol in word {
            let symbol = symbol.as_ref();
            current = current
                .iter()
                .flat_map(|&i| self.outgoing(i))
                .filter(|(s, _)| s == symbol)
                .map(|&(_, to)| to)
                .collect();

            if current.is_empty() {
                return false;
            }
        }

        self.accepting
            .iter()
            .filter_map(|a| self.state_index(a))
            .any(|a| current.contains(&a))
    }
}

impl TryFrom<RawAutomaton> for Automaton {
    type Error = FsaError;

    /// Runs checks E1 through E5 and builds the record.
    fn try_from(raw: RawAutomaton) -> Result<Self, Self::Error> {
        super::validator::check_record(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_input;

    fn automaton(input: &str) -> Automaton {
        Automaton::try_from(parse_input(input).unwrap()).unwrap()
    }

    #[test]
    fn test_type_literals() {
        assert_eq!("deterministic".parse(), Ok(FsaType::Deterministic));
        assert_eq!("non-deterministic".parse(), Ok(FsaType::NonDeterministic));
        assert_eq!("nondeterministic".parse::<FsaType>(), Err(FsaError::Malformed));
        assert_eq!(FsaType::NonDeterministic.to_string(), "non-deterministic");
    }

    #[test]
    fn test_indices_follow_declaration_order() {
        let fsa = automaton(
            "type=[deterministic]\nstates=[q2,q0,q1]\nalphabet=[a]\ninitial=[q0]\naccepting=[q1]\ntransitions=[q0>a>q1,q1>a>q2]",
        );
        assert_eq!(fsa.state_index("q2"), Some(0));
        assert_eq!(fsa.state_index("q0"), Some(1));
        assert_eq!(fsa.state_index("q1"), Some(2));
        assert_eq!(fsa.state_index("q7"), None);
        assert_eq!(fsa.outgoing(1), &[("a".to_string(), 2)]);
    }

    #[test]
    fn test_duplicate_declarations_collapse() {
        let fsa = automaton(
            "type=[deterministic]\nstates=[a,b,a]\nalphabet=[x,x]\ninitial=[a]\naccepting=[b,b]\ntransitions=[a>x>b]",
        );
        assert_eq!(fsa.states(), &["a", "b"]);
        assert_eq!(fsa.alphabet(), &["x"]);
        assert_eq!(fsa.accepting(), &["b"]);
    }

    #[test]
    fn test_sorted_accepting() {
        let fsa = automaton(
            "type=[non-deterministic]\nstates=[s,r,q]\nalphabet=[a]\ninitial=[s]\naccepting=[s,q,r]\ntransitions=[s>a>r,s>a>q]",
        );
        assert_eq!(fsa.sorted_accepting(), vec!["q", "r", "s"]);
        assert_eq!(fsa.accepting(), &["s", "q", "r"]);
    }

    #[test]
    fn test_accepts_nondeterministic() {
        // words over {a,b} ending in "ab"
        let fsa = automaton(
            "type=[non-deterministic]\nstates=[p,q,r]\nalphabet=[a,b]\ninitial=[p]\naccepting=[r]\ntransitions=[p>a>p,p>b>p,p>a>q,q>b>r]",
        );
        assert!(fsa.accepts(&["a", "b"]));
        assert!(fsa.accepts(&["b", "b", "a", "b"]));
        assert!(!fsa.accepts(&["a", "b", "a"]));
        assert!(!fsa.accepts::<&str>(&[]));
        assert!(!fsa.accepts(&["c"]));
    }

    #[test]
    fn test_accepts_empty_word_at_accepting_initial() {
        let fsa = automaton(
            "type=[deterministic]\nstates=[a]\nalphabet=[x]\ninitial=[a]\naccepting=[a]\ntransitions=[a>x>a]",
        );
        assert!(fsa.accepts::<&str>(&[]));
        assert!(fsa.accepts(&["x", "x", "x"]));
    }
}

//! Validation pipeline
//!
//! Checks run in a fixed priority order and stop at the first failure:
//!
//! | Code | Check |
//! |------|-------|
//! | E1 | duplicate transition, empty required field, bad type literal, bad charset, `initial` count |
//! | E2 | `initial` declared but blank |
//! | E3 | no accepting states |
//! | E4 | `initial` or an accepting state is not declared |
//! | E5 | a transition symbol is outside the alphabet |
//! | E6 | the transition graph is not reachable from `initial` |
//! | E7 | declared deterministic, but a state repeats an outgoing symbol |

use super::{Automaton, FsaType, Transition, TransitionGraph, analyzer};
use crate::error::FsaError;
use crate::parser::RawAutomaton;
use std::collections::HashSet;

/// Run every check against a parsed description.
///
/// Returns the validated automaton, or the first error code that fires.
pub fn validate(raw: RawAutomaton) -> Result<Automaton, FsaError> {
    let automaton = Automaton::try_from(raw)?;

    let graph = TransitionGraph::build(automaton.transitions());
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Built transition graph"
    );

    if !analyzer::is_connected(&graph, automaton.initial()) {
        tracing::debug!("E6: graph is not reachable from '{}'", automaton.initial());
        return Err(FsaError::Disjoint);
    }

    if automaton.kind() == FsaType::Deterministic && !analyzer::is_deterministic(&graph) {
        tracing::debug!("E7: a state repeats an outgoing symbol");
        return Err(FsaError::NonDeterministic);
    }

    Ok(automaton)
}

/// Checks E1-E5, which need nothing but the record itself.
pub(super) fn check_record(raw: RawAutomaton) -> Result<Automaton, FsaError> {
    let RawAutomaton {
        kind,
        states,
        alphabet,
        initial,
        accepting,
        transitions,
    } = raw;

    // E1
    let mut seen = HashSet::new();
    if !transitions.iter().all(|t| seen.insert(t.as_str())) {
        tracing::debug!("E1: duplicate transition");
        return Err(FsaError::Malformed);
    }

    if [&kind, &states, &alphabet, &transitions]
        .iter()
        .any(|field| field.first().is_none_or(|v| v.is_empty()))
    {
        tracing::debug!("E1: required field is empty");
        return Err(FsaError::Malformed);
    }

    let kind = match kind.as_slice() {
        [single] => single.parse::<FsaType>()?,
        _ => return Err(FsaError::Malformed),
    };

    let states = unique(states);
    if !states.iter().all(|s| is_state_name(s)) {
        tracing::debug!("E1: bad state identifier");
        return Err(FsaError::Malformed);
    }

    let alphabet = unique(alphabet);
    if !alphabet.iter().all(|a| super::transition::is_word(a)) {
        tracing::debug!("E1: bad alphabet symbol");
        return Err(FsaError::Malformed);
    }

    let initial = match unique(initial).as_slice() {
        [single] => single.clone(),
        _ => return Err(FsaError::Malformed),
    };

    let transitions = transitions
        .iter()
        .map(|t| t.parse::<Transition>())
        .collect::<Result<Vec<_>, _>>()?;

    // E2
    if initial.is_empty() {
        return Err(FsaError::InitialUndefined);
    }

    // E3
    let accepting = unique(accepting);
    if accepting.iter().all(String::is_empty) {
        return Err(FsaError::NoAcceptingStates);
    }

    // E4
    let declared: HashSet<&str> = states.iter().map(String::as_str).collect();
    if let Some(missing) = std::iter::once(&initial)
        .chain(&accepting)
        .find(|s| !declared.contains(s.as_str()))
    {
        return Err(FsaError::UnknownState(missing.clone()));
    }

    // E5
    let symbols: HashSet<&str> = alphabet.iter().map(String::as_str).collect();
    if let Some(t) = transitions
        .iter()
        .find(|t| !symbols.contains(t.symbol.as_str()))
    {
        return Err(FsaError::UnknownSymbol(t.symbol.clone()));
    }

    // Transition endpoints must be declared too; reported as E4 once the
    // symbols are known to be good.
    if let Some(missing) = transitions
        .iter()
        .flat_map(|t| [&t.from, &t.to])
        .find(|s| !declared.contains(s.as_str()))
    {
        return Err(FsaError::UnknownState(missing.clone()));
    }

    Ok(Automaton::from_checked(
        kind,
        states,
        alphabet,
        initial,
        accepting,
        transitions,
    ))
}

/// `[A-Za-z0-9]+`
fn is_state_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Drop repeated entries, keeping the first occurrence.
fn unique(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

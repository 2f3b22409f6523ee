//! Finite-state automaton model - record, transition graph and validation

pub mod analyzer;
pub mod automaton;
pub mod graph;
pub mod transition;
pub mod validator;

// Re-export key types
pub use automaton::{Automaton, FsaType};
pub use graph::{GraphStats, TransitionGraph};
pub use transition::Transition;
pub use validator::validate;

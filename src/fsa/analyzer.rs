//! Graph analysis: reachability and determinism
//!
//! Both checks work on the [`TransitionGraph`], so they only see states that
//! occur in some transition.

use super::TransitionGraph;
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};

/// Vertices reachable from `initial`, in breadth-first visitation order.
///
/// Edges are followed in their declared direction only. An initial state
/// with no vertex reaches nothing.
pub fn reachable(graph: &TransitionGraph, initial: &str) -> Vec<NodeIndex> {
    let Some(start) = graph.vertex(initial) else {
        return Vec::new();
    };

    let mut visited = HashSet::from([start]);
    let mut order = vec![start];
    let mut frontier = VecDeque::from([start]);

    while let Some(vertex) = frontier.pop_front() {
        for next in graph.neighbours(vertex) {
            if visited.insert(next) {
                order.push(next);
                frontier.push_back(next);
            }
        }
    }

    order
}

/// True when every vertex of the graph is reachable from `initial`.
///
/// An empty graph is vacuously connected.
pub fn is_connected(graph: &TransitionGraph, initial: &str) -> bool {
    let order = reachable(graph, initial);
    tracing::debug!(
        "BFS from '{}': {:?}",
        initial,
        order.iter().map(|&v| graph.label(v)).collect::<Vec<_>>()
    );
    order.len() == graph.vertex_count()
}

/// First `(state, symbol)` pair that leaves a state more than once.
pub fn find_repeated_symbol(graph: &TransitionGraph) -> Option<(&str, &str)> {
    graph.vertices().find_map(|vertex| {
        let mut seen = HashSet::new();
        graph
            .outgoing_symbols(vertex)
            .into_iter()
            .find(|symbol| !seen.insert(*symbol))
            .map(|symbol| (graph.label(vertex), symbol))
    })
}

/// True when no vertex has two outgoing edges sharing a symbol.
///
/// Missing transitions are fine: partial automata still count as deterministic.
pub fn is_deterministic(graph: &TransitionGraph) -> bool {
    match find_repeated_symbol(graph) {
        Some((state, symbol)) => {
            tracing::debug!("State '{}' repeats outgoing symbol '{}'", state, symbol);
            false
        }
        None => true,
    }
}

//! Transition graph

use super::Transition;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

/// A directed multigraph built from the declared transitions.
///
/// Only states that occur in at least one transition get a vertex; a declared
/// state with no incident transitions is invisible here. Parallel edges with
/// different symbols are all kept.
pub struct TransitionGraph {
    /// Vertices carry the state identifier, edges carry the symbol.
    pub graph: DiGraph<String, String>,

    /// State identifier -> vertex, filled in first-seen order.
    pub vertex_index: HashMap<String, NodeIndex>,
}

impl TransitionGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            vertex_index: HashMap::new(),
        }
    }

    pub fn build(transitions: &[Transition]) -> Self {
        let mut graph = Self::new();
        for t in transitions {
            let from = graph.ensure_vertex(&t.from);
            let to = graph.ensure_vertex(&t.to);
            graph.graph.add_edge(from, to, t.symbol.clone());
        }
        graph
    }

    /// Returns the vertex for `state`, creating it on first reference.
    fn ensure_vertex(&mut self, state: &str) -> NodeIndex {
        if let Some(&idx) = self.vertex_index.get(state) {
            return idx;
        }
        let idx = self.graph.add_node(state.to_string());
        self.vertex_index.insert(state.to_string(), idx);
        idx
    }

    pub fn vertex(&self, state: &str) -> Option<NodeIndex> {
        self.vertex_index.get(state).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn label(&self, vertex: NodeIndex) -> &str {
        self.graph
            .node_weight(vertex)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Edge targets of `vertex`, in declaration order (duplicates kept).
    pub fn neighbours(&self, vertex: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks adjacency lists newest-first
        let mut targets: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(vertex, Direction::Outgoing)
            .collect();
        targets.reverse();
        targets
    }

    /// Multiset of symbols on the edges leaving `vertex`.
    pub fn outgoing_symbols(&self, vertex: NodeIndex) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .graph
            .edges_directed(vertex, Direction::Outgoing)
            .map(|edge| edge.weight().as_str())
            .collect();
        symbols.reverse();
        symbols
    }

    /// Export to DOT format for Graphviz
    pub fn to_dot(&self, initial: &str, accepting: &[String]) -> String {
        let mut dot = "digraph Automaton {\n".to_string();
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle];\n");
        dot.push_str("  __start [shape=point];\n\n");

        for vertex in self.vertices() {
            let label = self.label(vertex);
            let shape = if accepting.iter().any(|a| a == label) {
                "doublecircle"
            } else {
                "circle"
            };
            dot.push_str(&format!("  \"{}\" [shape={}];\n", label, shape));
        }

        dot.push('\n');
        dot.push_str(&format!("  __start -> \"{}\";\n", initial));

        for edge in self.graph.raw_edges() {
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                self.label(edge.source()),
                self.label(edge.target()),
                edge.weight
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Get graph statistics against the declared state list
    pub fn stats(&self, states: &[String]) -> GraphStats {
        GraphStats {
            declared_states: states.len(),
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            self_loops: self
                .graph
                .raw_edges()
                .iter()
                .filter(|e| e.source() == e.target())
                .count(),
            states_without_vertex: states
                .iter()
                .filter(|s| self.vertex(s).is_none())
                .cloned()
                .collect(),
        }
    }
}

impl Default for TransitionGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub declared_states: usize,
    pub vertices: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub states_without_vertex: Vec<String>,
}

//! State-elimination table
//!
//! `R[k][i][j]` describes every path from state `i` to state `j` whose
//! intermediate states all have an index below `k`. Layer 0 holds direct
//! transitions; layer `k` is derived from layer `k - 1` by allowing pivot
//! `k - 1`:
//!
//! ```text
//! R[k][i][j] = (R[k-1][i][k-1])(R[k-1][k-1][k-1])*(R[k-1][k-1][j])|(R[k-1][i][j])
//! ```
//!
//! Every cell of every layer is kept and no simplification is applied, so
//! the output is a literal syntactic construction.

use super::{EMPTY_LANGUAGE, EPSILON};
use crate::fsa::Automaton;

/// The full `(n + 1) x n x n` table for one automaton.
#[derive(Debug, Clone)]
pub struct KleeneTable {
    layers: Vec<Vec<Vec<String>>>,
}

impl KleeneTable {
    pub fn build(automaton: &Automaton) -> Self {
        let n = automaton.states().len();
        let mut layers = Vec::with_capacity(n + 1);
        layers.push(base_layer(automaton));

        for k in 1..=n {
            let prev: &Vec<Vec<String>> = &layers[k - 1];
            let pivot = k - 1;
            let layer: Vec<Vec<String>> = (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| {
                            format!(
                                "({})({})*({})|({})",
                                prev[i][pivot], prev[pivot][pivot], prev[pivot][j], prev[i][j]
                            )
                        })
                        .collect()
                })
                .collect();
            tracing::trace!(layer = k, "Filled table layer");
            layers.push(layer);
        }

        Self { layers }
    }

    /// Number of states the table was built for.
    pub fn size(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Cell `R[k][i][j]`, if the indices are in range.
    pub fn cell(&self, k: usize, i: usize, j: usize) -> Option<&str> {
        self.layers
            .get(k)
            .and_then(|layer| layer.get(i))
            .and_then(|row| row.get(j))
            .map(String::as_str)
    }

    /// Cell `R[n][i][j]`: all paths from `i` to `j`.
    pub fn paths(&self, i: usize, j: usize) -> Option<&str> {
        self.cell(self.size(), i, j)
    }
}

/// Layer 0: direct transitions, plus `eps` on the diagonal.
fn base_layer(automaton: &Automaton) -> Vec<Vec<String>> {
    let n = automaton.states().len();

    let mut direct: Vec<Vec<Vec<&str>>> = vec![vec![Vec::new(); n]; n];
    for (i, row) in direct.iter_mut().enumerate() {
        for (symbol, j) in automaton.outgoing(i) {
            row[*j].push(symbol.as_str());
        }
    }

    direct
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter()
                .enumerate()
                .map(|(j, mut symbols)| {
                    if i == j {
                        symbols.push(EPSILON);
                    }
                    if symbols.is_empty() {
                        EMPTY_LANGUAGE.to_string()
                    } else {
                        symbols.join("|")
                    }
                })
                .collect()
        })
        .collect()
}

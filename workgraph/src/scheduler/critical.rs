//! Longest dependency chain computation.
//!
//! Two dynamic-programming passes over the level order: the forward pass
//! computes the longest chain ending at each node, the backward pass the
//! longest chain starting there. By the time a node is visited, every
//! neighbor in the pass direction already carries its final value. A node
//! lies on a critical chain exactly when the chain through it has no slack.
//! Cyclic nodes are absent from the levels and therefore never enter either
//! pass, as carriers or as contributors.

use crate::graph::DependencyGraph;
use crate::interner::TaskId;

use super::leveling::Leveling;

/// Result of the longest chain passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChainSummary {
    /// Every node on a chain of maximum length, ascending. Distinct chains
    /// tying for longest all contribute their members.
    pub critical: Vec<TaskId>,
    /// Tasks on the longest chain, endpoints included. Zero when no node
    /// was leveled.
    pub length: usize,
}

pub(crate) fn longest_chain(graph: &DependencyGraph, leveling: &Leveling) -> ChainSummary {
    let n = graph.len();
    // Zero doubles as "never leveled"; every leveled node ends up >= 1.
    let mut ending_at: Vec<usize> = vec![0; n];

    // Forward pass: dependencies sit in earlier levels, so their values are
    // final before any dependent reads them.
    for level in &leveling.levels {
        for &node in level {
            let longest_dep = graph
                .deps(node)
                .iter()
                .map(|&dep| ending_at[dep as usize])
                .max()
                .unwrap_or(0);
            ending_at[node as usize] = longest_dep + 1;
        }
    }

    let length = ending_at.iter().copied().max().unwrap_or(0);
    if length == 0 {
        return ChainSummary {
            critical: Vec::new(),
            length: 0,
        };
    }

    // Backward pass in reverse level order: dependents sit in later levels.
    // A cyclic dependent keeps a zero here, so no chain extends into a cycle.
    let mut starting_at: Vec<usize> = vec![0; n];
    for level in leveling.levels.iter().rev() {
        for &node in level {
            let longest_dependent = graph
                .dependents(node)
                .iter()
                .map(|&dependent| starting_at[dependent as usize])
                .max()
                .unwrap_or(0);
            starting_at[node as usize] = longest_dependent + 1;
        }
    }

    // Zero slack: the longest chain ending here joined to the longest chain
    // starting here, counting this node once, reaches the overall maximum.
    let critical: Vec<TaskId> = (0..n as TaskId)
        .filter(|&node| {
            let idx = node as usize;
            ending_at[idx] > 0 && ending_at[idx] + starting_at[idx] - 1 == length
        })
        .collect();

    ChainSummary { critical, length }
}

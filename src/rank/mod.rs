//! Rank estimation algorithms
//!
//! This module provides two independent estimators for the same node-ranking
//! problem: a Monte-Carlo random-walk simulation and a deterministic
//! probability-mass propagation. Both operate on the uniform out-edge
//! transition model of a [`CsrGraph`](crate::graph::csr::CsrGraph) and
//! produce the same kind of score mapping.

pub mod distribution;
pub mod stochastic;

use serde::Serialize;

use crate::error::RankError;
use crate::graph::csr::CsrGraph;

/// Reject graphs neither estimator has a defined transition model for.
///
/// An empty graph has no start node to draw and no mass to distribute; a
/// dangling node has no out-edge to sample and would lose propagated mass.
/// Rejecting up front keeps failure independent of which nodes a particular
/// seed happens to visit.
pub(crate) fn validate_graph(graph: &CsrGraph) -> Result<(), RankError> {
    if graph.is_empty() {
        return Err(RankError::InvalidParameter(
            "graph has no nodes".to_string(),
        ));
    }
    if let Some(&node) = graph.dangling_nodes().first() {
        return Err(RankError::DanglingNode {
            node: graph.name(node).to_string(),
        });
    }
    Ok(())
}

/// Result of a rank estimation
#[derive(Debug, Clone, Serialize)]
pub struct RankResult {
    /// Scores for each node (indexed by node ID)
    ///
    /// Non-negative; for the distribution estimator these are probabilities
    /// summing to 1, for the stochastic estimator they are hit frequencies
    /// approximating the same probabilities.
    pub scores: Vec<f64>,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

//! Distribution rank estimation
//!
//! Estimates node rank by repeatedly propagating a probability mass vector
//! across out-edges: power iteration over the row-stochastic transition
//! matrix implied by uniform out-edge weighting, without a damping term.

use log::debug;

use super::RankResult;
use crate::error::RankError;
use crate::graph::csr::CsrGraph;

/// Deterministic probability-propagation rank estimator
///
/// Runs exactly `num_rounds` propagation rounds; there is no convergence
/// criterion. Given the same graph and round count the result is always
/// identical — no randomness is involved.
#[derive(Debug, Clone)]
pub struct DistributionRank {
    /// Number of propagation rounds
    pub num_rounds: usize,
}

impl DistributionRank {
    /// Create a new estimator for the given round count
    pub fn new(num_rounds: usize) -> Self {
        Self { num_rounds }
    }

    /// Run the estimation on a graph
    ///
    /// Every node starts with mass `1 / N`. Each round, every node splits
    /// its current mass evenly across its out-edges. Rounds are strictly
    /// sequential: each depends on the complete result of the previous one.
    pub fn run(&self, graph: &CsrGraph) -> Result<RankResult, RankError> {
        super::validate_graph(graph)?;

        let n = graph.num_nodes;
        debug!("propagating mass over {} rounds", self.num_rounds);

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        for _ in 0..self.num_rounds {
            next.fill(0.0);

            for node in 0..n as u32 {
                // validate_graph guarantees a non-zero degree
                let share = scores[node as usize] / graph.degree(node) as f64;
                for target in graph.neighbors(node) {
                    next[target as usize] += share;
                }
            }

            std::mem::swap(&mut scores, &mut next);
        }

        Ok(RankResult::new(scores))
    }
}

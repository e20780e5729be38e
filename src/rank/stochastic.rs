//! Stochastic rank estimation
//!
//! Estimates node rank by counting how frequently independent random walks,
//! started on a uniformly random node and following uniformly random
//! out-edges, end on each node of the graph.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::RankResult;
use crate::error::RankError;
use crate::graph::csr::CsrGraph;

/// Monte-Carlo random-walk rank estimator
///
/// Walks are mutually independent, so they are partitioned across the rayon
/// pool. Each walk draws from its own counter-derived ChaCha stream, which
/// makes the result bit-identical for a given seed regardless of how many
/// worker threads run it.
#[derive(Debug, Clone)]
pub struct StochasticRank {
    /// Number of independent random walks to simulate
    pub num_walks: usize,
    /// Number of hops taken before a walk terminates
    pub num_steps: usize,
    /// Seed for the random source
    pub seed: u64,
}

impl StochasticRank {
    /// Create a new estimator for the given walk count and length
    pub fn new(num_walks: usize, num_steps: usize) -> Self {
        Self {
            num_walks,
            num_steps,
            seed: 0,
        }
    }

    /// Set the seed for the random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run the estimation on a graph
    ///
    /// Returns the per-node hit frequency: each walk contributes
    /// `1 / num_walks` to the node it ends on. Nodes never visited keep a
    /// score of 0.
    pub fn run(&self, graph: &CsrGraph) -> Result<RankResult, RankError> {
        if self.num_walks == 0 {
            return Err(RankError::InvalidParameter(
                "num_walks must be positive".to_string(),
            ));
        }
        super::validate_graph(graph)?;

        let n = graph.num_nodes;
        debug!(
            "simulating {} walks of {} steps (seed {})",
            self.num_walks, self.num_steps, self.seed
        );

        // Integer hit counters merge exactly, so the reduction order (and
        // therefore the worker count) cannot affect the result.
        let hits = (0..self.num_walks)
            .into_par_iter()
            .try_fold(
                || vec![0u64; n],
                |mut hits, walk| {
                    let end = self.walk(graph, walk as u64)?;
                    hits[end as usize] += 1;
                    Ok::<_, RankError>(hits)
                },
            )
            .try_reduce(
                || vec![0u64; n],
                |mut acc, partial| {
                    for (a, p) in acc.iter_mut().zip(partial) {
                        *a += p;
                    }
                    Ok(acc)
                },
            )?;

        let scale = 1.0 / self.num_walks as f64;
        let scores = hits.into_iter().map(|h| h as f64 * scale).collect();
        Ok(RankResult::new(scores))
    }

    /// Simulate one walk and return the node it ends on
    fn walk(&self, graph: &CsrGraph, stream: u64) -> Result<u32, RankError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(stream);

        let mut node = rng.gen_range(0..graph.num_nodes as u32);
        for _ in 0..self.num_steps {
            let degree = graph.degree(node);
            if degree == 0 {
                return Err(RankError::DanglingNode {
                    node: graph.name(node).to_string(),
                });
            }
            node = graph.target(node, rng.gen_range(0..degree));
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_cycle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.add_edge(a, b);
        builder.add_edge(b, c);
        builder.add_edge(c, a);

        CsrGraph::from_builder(&builder)
    }

    // Aperiodic and irreducible; stationary distribution (4/9, 2/9, 1/3).
    fn build_mixing_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.add_edge(a, b);
        builder.add_edge(a, c);
        builder.add_edge(b, a);
        builder.add_edge(b, c);
        builder.add_edge(c, a);

        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_scores_sum_to_one() {
        let graph = build_cycle_graph();
        let result = StochasticRank::new(1000, 5).run(&graph).unwrap();

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let graph = build_mixing_graph();
        let estimator = StochasticRank::new(500, 10).with_seed(42);

        let first = estimator.run(&graph).unwrap();
        let second = estimator.run(&graph).unwrap();

        assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn test_different_seeds_differ() {
        let graph = build_mixing_graph();

        let first = StochasticRank::new(10_000, 10)
            .with_seed(1)
            .run(&graph)
            .unwrap();
        let second = StochasticRank::new(10_000, 10)
            .with_seed(2)
            .run(&graph)
            .unwrap();

        assert_ne!(first.scores, second.scores);
    }

    #[test]
    fn test_converges_to_stationary_distribution() {
        let graph = build_mixing_graph();
        let result = StochasticRank::new(20_000, 20)
            .with_seed(7)
            .run(&graph)
            .unwrap();

        let expected = [4.0 / 9.0, 2.0 / 9.0, 1.0 / 3.0];
        for (score, exact) in result.scores.iter().zip(expected) {
            assert!(
                (score - exact).abs() < 0.05,
                "score {score} too far from {exact}"
            );
        }
    }

    #[test]
    fn test_zero_steps_estimates_start_distribution() {
        let graph = build_cycle_graph();
        let result = StochasticRank::new(10_000, 0)
            .with_seed(3)
            .run(&graph)
            .unwrap();

        // Without hops the walk ends where it starts: uniform over nodes.
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 0.05);
        }
    }

    #[test]
    fn test_dangling_node_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        builder.add_edge(a, b);
        let graph = CsrGraph::from_builder(&builder);

        let err = StochasticRank::new(100, 5).run(&graph).unwrap_err();
        match err {
            RankError::DanglingNode { node } => assert_eq!(node, "b"),
            other => panic!("expected dangling node error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_walks_is_invalid() {
        let graph = build_cycle_graph();
        let err = StochasticRank::new(0, 5).run(&graph).unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(_)));
    }

    #[test]
    fn test_empty_graph_is_invalid() {
        let graph = CsrGraph::default();
        let err = StochasticRank::new(100, 5).run(&graph).unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(_)));
    }
}

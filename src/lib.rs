//! webrank — PageRank estimation over directed link graphs
//!
//! Two independent estimators approximate the same node ranking:
//!
//! - [`StochasticRank`] simulates many seeded random walks and counts where
//!   they end.
//! - [`DistributionRank`] propagates a probability mass vector across
//!   out-edges for a fixed number of rounds.
//!
//! Both operate on a read-only [`CsrGraph`] with uniform out-edge
//! transitions and no damping term, so for aperiodic, strongly connected
//! graphs they converge to the same stationary distribution.
//!
//! ```rust
//! use std::io::Cursor;
//! use webrank::{load_graph, DistributionRank, StochasticRank};
//!
//! let graph = load_graph(Cursor::new("a b\nb c\nc a\n")).unwrap();
//!
//! let walks = StochasticRank::new(10_000, 6).with_seed(42).run(&graph).unwrap();
//! let rounds = DistributionRank::new(6).run(&graph).unwrap();
//!
//! assert!((walks.score(0) - rounds.score(0)).abs() < 0.05);
//! ```

pub mod error;
pub mod graph;
pub mod rank;
pub mod report;

pub use error::RankError;
pub use graph::builder::GraphBuilder;
pub use graph::csr::CsrGraph;
pub use graph::loader::load_graph;
pub use rank::distribution::DistributionRank;
pub use rank::stochastic::StochasticRank;
pub use rank::RankResult;
pub use report::Ranking;

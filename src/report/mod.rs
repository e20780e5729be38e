//! Ranking reports
//!
//! Pairs estimator scores with node names and formats the top entries as a
//! tab-separated table, one `<score*100 to 2 decimals>\t<name>` line per
//! node.

use serde::Serialize;

use crate::graph::csr::CsrGraph;
use crate::rank::RankResult;

/// A single ranked node
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    /// Node name
    pub name: String,
    /// Estimated score
    pub score: f64,
}

/// A ranking table sorted by score descending
///
/// Ties are broken by name so the printed order is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    /// Entries in descending score order
    pub entries: Vec<RankEntry>,
}

impl Ranking {
    /// Build a ranking from estimator scores and the graph's node names
    pub fn from_result(result: &RankResult, graph: &CsrGraph) -> Self {
        let mut entries: Vec<RankEntry> = result
            .scores
            .iter()
            .enumerate()
            .map(|(i, &score)| RankEntry {
                name: graph.name(i as u32).to_string(),
                score,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap()
                .then_with(|| a.name.cmp(&b.name))
        });

        Self { entries }
    }

    /// The top `n` entries
    pub fn top(&self, n: usize) -> &[RankEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Format the top `n` entries, one line per node
    pub fn format_top(&self, n: usize) -> String {
        self.top(n)
            .iter()
            .map(|e| format!("{:.2}\t{}", e.score * 100.0, e.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

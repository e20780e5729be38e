//! Edge-list loading
//!
//! Parses the `source target` text format: one directed edge per line, two
//! whitespace-separated tokens. Any other token count is a parse error and
//! no graph is produced.

use std::io::BufRead;

use log::debug;

use super::builder::GraphBuilder;
use super::csr::CsrGraph;
use crate::error::RankError;

/// Load a directed graph from an edge-list text stream
///
/// Each line must contain exactly two whitespace-separated tokens denoting a
/// directed edge from the first node to the second. Nodes appearing only as
/// targets are materialized with out-degree zero.
pub fn load_graph<R: BufRead>(reader: R) -> Result<CsrGraph, RankError> {
    let mut builder = GraphBuilder::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let [source, target] = tokens[..] else {
            return Err(RankError::Parse {
                line: idx + 1,
                found: tokens.len(),
            });
        };

        let from = builder.get_or_create_node(source);
        let to = builder.get_or_create_node(target);
        builder.add_edge(from, to);
    }

    debug!(
        "loaded graph: {} nodes, {} edges",
        builder.node_count(),
        builder.edge_count()
    );

    Ok(CsrGraph::from_builder(&builder))
}

//! Error types for graph loading and rank estimation.

use thiserror::Error;

/// Errors that can occur while loading a graph or running an estimator.
///
/// Both estimators fail immediately and return no partial result; the
/// computation is deterministic given its inputs (or its seed), so there is
/// nothing to retry.
#[derive(Debug, Error)]
pub enum RankError {
    /// An edge-list line did not split into exactly two tokens.
    #[error("line {line}: expected `source target`, found {found} token(s)")]
    Parse { line: usize, found: usize },

    /// A node with no outgoing links was found in the graph.
    ///
    /// Neither estimator has a defined transition out of such a node: the
    /// random walk cannot sample an out-edge, and the propagation step would
    /// divide by a zero out-degree. Graphs containing one are rejected up
    /// front.
    #[error("node `{node}` has no outgoing links")]
    DanglingNode { node: String },

    /// A parameter outside the estimator's domain (zero walks, empty graph).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O failure while reading the edge-list input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

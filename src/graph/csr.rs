//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores out-edges contiguously, making both neighbor iteration (for
//! mass propagation) and indexed target lookup (for uniform edge sampling)
//! very fast.

use super::builder::GraphBuilder;

/// A directed graph in Compressed Sparse Row format
///
/// Built once from a [`GraphBuilder`] and treated as read-only by both
/// estimators. Target order within a node is the builder's insertion order,
/// so indexed sampling is reproducible given a seeded generator.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Out-degree for each node
    pub out_degree: Vec<u32>,
    /// Names for each node
    pub names: Vec<String>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(builder.edge_count());
        let mut out_degree = Vec::with_capacity(num_nodes);
        let mut names = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            names.push(node.name.clone());
            out_degree.push(node.targets.len() as u32);
            col_idx.extend_from_slice(&node.targets);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            out_degree,
            names,
        }
    }

    /// Iterate over the out-edge targets of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        self.col_idx[start..end].iter().copied()
    }

    /// Get the k-th out-edge target of a node
    ///
    /// `k` must be less than the node's out-degree.
    pub fn target(&self, node: u32, k: u32) -> u32 {
        self.col_idx[self.row_ptr[node as usize] + k as usize]
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Get the name for a node
    pub fn name(&self, node: u32) -> &str {
        &self.names[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }

    /// Get node ID by name (linear search - use sparingly)
    pub fn get_node_by_name(&self, name: &str) -> Option<u32> {
        self.names.iter().position(|n| n == name).map(|i| i as u32)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
            names: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> GraphBuilder {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.add_edge(a, b);
        builder.add_edge(a, c);
        builder.add_edge(b, c);
        builder.add_edge(c, a);

        builder
    }

    #[test]
    fn test_csr_conversion() {
        let builder = build_test_graph();
        let csr = CsrGraph::from_builder(&builder);

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 4);
        assert_eq!(csr.names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_neighbor_iteration_keeps_order() {
        let builder = build_test_graph();
        let csr = CsrGraph::from_builder(&builder);

        // Node "a" (id 0) links to "b" then "c", in insertion order
        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors, vec![1, 2]);
    }

    #[test]
    fn test_indexed_target_access() {
        let builder = build_test_graph();
        let csr = CsrGraph::from_builder(&builder);

        assert_eq!(csr.target(0, 0), 1);
        assert_eq!(csr.target(0, 1), 2);
        assert_eq!(csr.target(2, 0), 0);
    }

    #[test]
    fn test_degree() {
        let builder = build_test_graph();
        let csr = CsrGraph::from_builder(&builder);

        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.degree(1), 1);
        assert_eq!(csr.degree(2), 1);
    }

    #[test]
    fn test_empty_graph() {
        let builder = GraphBuilder::new();
        let csr = CsrGraph::from_builder(&builder);

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.dangling_nodes().is_empty());
    }

    #[test]
    fn test_dangling_nodes() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        builder.add_edge(a, b);
        // "b" never links anywhere

        let csr = CsrGraph::from_builder(&builder);

        assert_eq!(csr.dangling_nodes(), vec![1]);
    }

    #[test]
    fn test_get_node_by_name() {
        let builder = build_test_graph();
        let csr = CsrGraph::from_builder(&builder);

        assert_eq!(csr.get_node_by_name("a"), Some(0));
        assert_eq!(csr.get_node_by_name("b"), Some(1));
        assert_eq!(csr.get_node_by_name("z"), None);
    }
}

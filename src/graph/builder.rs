//! Graph builder with efficient node interning
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) name-to-id lookups during construction.

use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The name (e.g. URL) for this node
    pub name: String,
    /// Out-edge targets in insertion order
    ///
    /// Duplicates are kept: a repeated edge doubles that target's share of
    /// the node's transition probability.
    pub targets: Vec<u32>,
}

impl BuilderNode {
    /// Create a new node with no out-edges
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            targets: Vec::new(),
        }
    }
}

/// A mutable graph builder optimized for incremental construction
///
/// Edges are directed. A node that only ever appears as a target is still
/// materialized, with an empty target list (out-degree zero).
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps name -> node ID
    name_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            name_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            name_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given name, returning its ID
    pub fn get_or_create_node(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.name_to_id.insert(name.to_string(), id);
        self.nodes.push(BuilderNode::new(name));
        id
    }

    /// Add a directed edge from one node to another
    ///
    /// Target order is insertion order and is never reordered, so sampling
    /// over out-edges is reproducible given a seeded generator.
    pub fn add_edge(&mut self, from: u32, to: u32) {
        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.targets.push(to);
        }
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.targets.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by name
    pub fn get_node_id(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Stable identifier for a node within its owning [`NavGraph`].
///
/// Identifiers are handed out by [`NavGraph::add_node`] and index the
/// graph's node arena. They are only meaningful for the graph that issued
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cartesian coordinates for a node in search space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Directed edge within the navigation graph.
///
/// Immutable once constructed; traversal cost is guaranteed non-negative by
/// [`NavGraph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f64,
}

/// A node of the navigation graph: identity, spatial position, and the
/// complete set of outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: Position,
    edges: Vec<Edge>,
}

impl Node {
    /// Outgoing edges from this node, in insertion order.
    pub fn out_edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// In-memory navigation graph.
///
/// Construction happens up front through [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge); searches borrow the graph shared and never
/// mutate it, so any number of independent searches may read it
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct NavGraph {
    nodes: Vec<Node>,
    name_to_id: HashMap<String, NodeId>,
}

impl NavGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node and return its identifier.
    ///
    /// Node names must be unique within the graph.
    pub fn add_node(&mut self, name: impl Into<String>, position: Position) -> Result<NodeId> {
        let name = name.into();
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateNode { name });
        }

        let id = NodeId(self.nodes.len() as u32);
        self.name_to_id.insert(name.clone(), id);
        self.nodes.push(Node {
            id,
            name,
            position,
            edges: Vec::new(),
        });
        Ok(id)
    }

    /// Add a directed edge between two existing nodes.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<()> {
        if from.index() >= self.nodes.len() {
            return Err(Error::UnknownNodeId { id: from });
        }
        if to.index() >= self.nodes.len() {
            return Err(Error::UnknownNodeId { id: to });
        }
        if cost < 0.0 {
            return Err(Error::NegativeEdgeCost { from, to, cost });
        }

        self.nodes[from.index()].edges.push(Edge { from, to, cost });
        Ok(())
    }

    /// Add a pair of directed edges covering both traversal directions.
    pub fn add_edge_symmetric(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<()> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Borrow a node by identifier.
    ///
    /// Panics if the identifier was issued by a different graph; identifiers
    /// obtained from this graph are always valid.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Outgoing edges for a node, or an empty slice for an identifier this
    /// graph does not own.
    pub fn out_edges(&self, id: NodeId) -> &[Edge] {
        self.nodes
            .get(id.index())
            .map(Node::out_edges)
            .unwrap_or(&[])
    }

    /// Lookup a node identifier by its case-sensitive name.
    pub fn node_id_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a node name by identifier.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.index()).map(|node| node.name.as_str())
    }

    /// Return up to `limit` node names similar to `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| (strsim::jaro_winkler(name, &node.name), node.name.as_str()))
            .filter(|(score, _)| *score >= 0.7)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Iterate over all nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }
}

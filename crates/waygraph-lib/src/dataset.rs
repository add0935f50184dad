//! On-disk graph descriptions.
//!
//! Navigation graphs are described as JSON documents with named nodes and
//! edges. The description layer stays separate from [`NavGraph`] itself:
//! collaborators that build graphs programmatically never touch it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::graph::{NavGraph, Position};

/// Serialized form of a navigation graph.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

/// A node entry in a graph description.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDescription {
    pub name: String,
    pub position: [f64; 3],
}

/// An edge entry in a graph description. Endpoints are node names.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    pub cost: f64,
    /// Also add the reverse edge with the same cost.
    #[serde(default)]
    pub bidirectional: bool,
}

/// Load a navigation graph from a JSON description file.
pub fn load_graph(path: &Path) -> Result<NavGraph> {
    let contents = fs::read_to_string(path)?;
    let description: GraphDescription = serde_json::from_str(&contents)?;
    build_graph(&description).map_err(|error| match error {
        Error::UnknownNode { name, .. } => Error::InvalidGraphFile {
            path: path.to_path_buf(),
            message: format!("edge references unknown node '{name}'"),
        },
        other => other,
    })
}

/// Build a [`NavGraph`] from an in-memory description.
pub fn build_graph(description: &GraphDescription) -> Result<NavGraph> {
    let mut graph = NavGraph::new();

    for node in &description.nodes {
        let [x, y, z] = node.position;
        graph.add_node(node.name.clone(), Position { x, y, z })?;
    }

    for edge in &description.edges {
        let from = resolve(&graph, &edge.from)?;
        let to = resolve(&graph, &edge.to)?;
        if edge.bidirectional {
            graph.add_edge_symmetric(from, to, edge.cost)?;
        } else {
            graph.add_edge(from, to, edge.cost)?;
        }
    }

    Ok(graph)
}

fn resolve(graph: &NavGraph, name: &str) -> Result<crate::graph::NodeId> {
    graph.node_id_by_name(name).ok_or_else(|| Error::UnknownNode {
        name: name.to_string(),
        suggestions: graph.fuzzy_node_matches(name, 3),
    })
}

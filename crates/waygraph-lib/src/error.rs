use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the waygraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node name could not be found in the graph.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an edge references a node identifier the graph does not own.
    #[error("node id {id:?} does not belong to this graph")]
    UnknownNodeId { id: NodeId },

    /// Raised when two nodes are registered under the same name.
    #[error("duplicate node name: {name}")]
    DuplicateNode { name: String },

    /// Raised when an edge is constructed with a negative traversal cost.
    #[error("negative cost {cost} on edge {from:?} -> {to:?}")]
    NegativeEdgeCost { from: NodeId, to: NodeId, cost: f64 },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a graph description file fails structural validation.
    #[error("invalid graph description in {path}: {message}")]
    InvalidGraphFile { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

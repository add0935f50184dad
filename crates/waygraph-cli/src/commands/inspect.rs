//! Inspect command handler.

use std::path::Path;

use anyhow::{Context, Result};

use waygraph_lib::load_graph;

use crate::output::{self, OutputFormat};

pub fn run(graph_path: &Path, format: OutputFormat) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;

    let dead_ends: Vec<String> = graph
        .nodes()
        .filter(|node| node.out_edges().is_empty())
        .map(|node| node.name.clone())
        .collect();

    output::render_summary(graph.node_count(), graph.edge_count(), &dead_ends, format)
}

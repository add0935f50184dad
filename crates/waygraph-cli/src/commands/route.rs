//! Route command handler.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use waygraph_lib::{
    load_graph, plan_route, plan_route_budgeted, RouteAlgorithm, RouteConstraints, RouteRequest,
};

use crate::output::{self, OutputFormat};

/// Arguments for the route command.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Starting node name.
    #[arg(long = "from")]
    pub from: String,

    /// Destination node name.
    #[arg(long = "to")]
    pub to: String,

    /// Algorithm to use when planning the route.
    #[arg(long, value_enum, default_value = "a-star")]
    pub algorithm: AlgorithmArg,

    /// Node names to keep out of the route (repeatable).
    #[arg(long = "avoid")]
    pub avoid: Vec<String>,

    /// Maximum traversal cost allowed for any single edge.
    #[arg(long)]
    pub max_edge_cost: Option<f64>,

    /// Bound the search to this many step transitions.
    #[arg(long)]
    pub max_steps: Option<usize>,
}

/// Algorithm selector exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Dijkstra,
    #[value(name = "a-star")]
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

impl RouteArgs {
    fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm.into(),
            constraints: RouteConstraints {
                avoid: self.avoid.clone(),
                max_edge_cost: self.max_edge_cost,
            },
        }
    }
}

pub fn run(graph_path: &Path, format: OutputFormat, args: RouteArgs) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let request = args.to_request();
    let plan = match args.max_steps {
        None => plan_route(&graph, &request)?,
        Some(budget) => match plan_route_budgeted(&graph, &request, budget)? {
            Some(plan) => plan,
            None => bail!("search still running after {budget} steps; raise --max-steps"),
        },
    };

    output::render_plan(&graph, &plan, format)
}

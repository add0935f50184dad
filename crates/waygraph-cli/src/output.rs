//! Output formatting for command results.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use waygraph_lib::{NavGraph, RoutePlan};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Serialize)]
struct PlanDocument<'a> {
    algorithm: String,
    start: &'a str,
    goal: &'a str,
    hops: usize,
    total_cost: f64,
    steps: Vec<StepDocument<'a>>,
}

#[derive(Serialize)]
struct StepDocument<'a> {
    index: usize,
    name: &'a str,
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    nodes: usize,
    edges: usize,
    dead_ends: &'a [String],
}

/// Render a planned route in the requested format.
pub fn render_plan(graph: &NavGraph, plan: &RoutePlan, format: OutputFormat) -> Result<()> {
    let names: Vec<&str> = plan
        .steps
        .iter()
        .map(|&id| graph.node_name(id).unwrap_or("<unknown>"))
        .collect();

    match format {
        OutputFormat::Text => {
            let start = names.first().copied().unwrap_or("<unknown>");
            let goal = names.last().copied().unwrap_or("<unknown>");
            println!(
                "Route from {} to {} ({} hops; algorithm: {}):",
                start,
                goal,
                plan.hop_count(),
                plan.algorithm
            );
            for (index, name) in names.iter().enumerate() {
                println!("  {}. {}", index + 1, name);
            }
            println!("Total cost: {}", plan.total_cost);
        }
        OutputFormat::Json => {
            let document = PlanDocument {
                algorithm: plan.algorithm.to_string(),
                start: names.first().copied().unwrap_or("<unknown>"),
                goal: names.last().copied().unwrap_or("<unknown>"),
                hops: plan.hop_count(),
                total_cost: plan.total_cost,
                steps: names
                    .iter()
                    .enumerate()
                    .map(|(index, name)| StepDocument {
                        index: index + 1,
                        name,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}

/// Render a graph summary in the requested format.
pub fn render_summary(
    nodes: usize,
    edges: usize,
    dead_ends: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Nodes: {nodes}");
            println!("Edges: {edges}");
            if dead_ends.is_empty() {
                println!("Dead ends: none");
            } else {
                println!("Dead ends: {}", dead_ends.join(", "));
            }
        }
        OutputFormat::Json => {
            let document = SummaryDocument {
                nodes,
                edges,
                dead_ends,
            };
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}

//! Route planning facade.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*)
//! - [`RouteConstraints`] - Constraints applied during route planning
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Algorithms are encapsulated behind the [`RoutePlanner`] strategy trait,
//! so new ones can be added without touching the orchestration here. Node
//! references in requests are names; the facade resolves them against the
//! graph and surfaces fuzzy suggestions for typos.

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{NavGraph, Node, NodeId};
use crate::heuristic::Heuristic;
use crate::path::Route;
use crate::search::{astar_to_node, dijkstra_to_node, AStarSearch, IncrementalSearch, SearchStatus};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (zero heuristic).
    Dijkstra,
    /// A* search (straight-line heuristic).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Constraints applied during route planning.
#[derive(Debug, Clone, Default)]
pub struct RouteConstraints {
    /// Node names that must not appear in the resulting route.
    pub avoid: Vec<String>,
    /// Maximum traversal cost allowed for any single edge.
    pub max_edge_cost: Option<f64>,
}

impl RouteConstraints {
    fn is_trivial(&self) -> bool {
        self.avoid.is_empty() && self.max_edge_cost.is_none()
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    pub constraints: RouteConstraints,
}

impl RouteRequest {
    /// Convenience constructor for A* routes without extra constraints.
    pub fn astar(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
            constraints: RouteConstraints::default(),
        }
    }

    /// Convenience constructor for Dijkstra routes without extra constraints.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
            constraints: RouteConstraints::default(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub total_cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a node name to an identifier, with fuzzy suggestions on a miss.
fn resolve_node(graph: &NavGraph, name: &str) -> Result<NodeId> {
    graph.node_id_by_name(name).ok_or_else(|| Error::UnknownNode {
        name: name.to_string(),
        suggestions: graph.fuzzy_node_matches(name, 3),
    })
}

/// Resolve a list of avoided node names to their identifiers.
fn resolve_avoided(graph: &NavGraph, avoided: &[String]) -> Result<HashSet<NodeId>> {
    let mut resolved = HashSet::new();
    for name in avoided {
        resolved.insert(resolve_node(graph, name)?);
    }
    Ok(resolved)
}

/// Rebuild the graph without edges the constraints forbid.
///
/// Node identifiers are preserved: nodes are re-registered in identifier
/// order, so a plan computed against the filtered graph maps directly back
/// onto the original.
fn filtered_graph(
    graph: &NavGraph,
    avoided: &HashSet<NodeId>,
    max_edge_cost: Option<f64>,
) -> Result<NavGraph> {
    let mut filtered = NavGraph::new();
    for node in graph.nodes() {
        filtered.add_node(node.name.clone(), node.position)?;
    }

    for node in graph.nodes() {
        for edge in node.out_edges() {
            if avoided.contains(&edge.from) || avoided.contains(&edge.to) {
                continue;
            }
            if let Some(limit) = max_edge_cost {
                if edge.cost > limit {
                    continue;
                }
            }
            filtered.add_edge(edge.from, edge.to, edge.cost)?;
        }
    }

    Ok(filtered)
}

/// Resolved endpoints plus the graph the search should actually run on.
struct PreparedRoute {
    start: NodeId,
    goal: NodeId,
    constrained: Option<NavGraph>,
}

fn prepare(graph: &NavGraph, request: &RouteRequest) -> Result<PreparedRoute> {
    let start = resolve_node(graph, &request.start)?;
    let goal = resolve_node(graph, &request.goal)?;

    let avoided = resolve_avoided(graph, &request.constraints.avoid)?;
    if avoided.contains(&start) || avoided.contains(&goal) {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    let constrained = if request.constraints.is_trivial() {
        None
    } else {
        Some(filtered_graph(
            graph,
            &avoided,
            request.constraints.max_edge_cost,
        )?)
    };

    Ok(PreparedRoute {
        start,
        goal,
        constrained,
    })
}

fn trivial_plan(algorithm: RouteAlgorithm, node: NodeId) -> RoutePlan {
    RoutePlan {
        algorithm,
        start: node,
        goal: node,
        steps: vec![node],
        total_cost: 0.0,
    }
}

fn plan_from_route(algorithm: RouteAlgorithm, goal: NodeId, route: &Route) -> RoutePlan {
    tracing::debug!(
        algorithm = %algorithm,
        hops = route.len(),
        cost = route.total_cost,
        "route planned"
    );

    RoutePlan {
        algorithm,
        start: route.source,
        goal,
        steps: route.nodes(),
        total_cost: route.total_cost,
    }
}

/// Compute a route using the requested algorithm and constraints.
///
/// Resolves node names, validates the endpoints against the constraints,
/// selects the planner strategy, and executes the search to completion. An
/// unreachable goal is reported as [`Error::RouteNotFound`].
pub fn plan_route(graph: &NavGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let prepared = prepare(graph, request)?;
    if prepared.start == prepared.goal {
        return Ok(trivial_plan(request.algorithm, prepared.start));
    }

    let searched = prepared.constrained.as_ref().unwrap_or(graph);
    let planner = select_planner(request.algorithm);
    let route = planner
        .find_path(searched, prepared.start, prepared.goal)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    Ok(plan_from_route(request.algorithm, prepared.goal, &route))
}

/// Compute a route with a bounded number of search steps.
///
/// Identical semantics to [`plan_route`] except that at most `max_steps`
/// step transitions are executed. Returns `Ok(None)` when the budget runs
/// out while the search is still in progress; the caller decides whether to
/// retry with a larger budget.
pub fn plan_route_budgeted(
    graph: &NavGraph,
    request: &RouteRequest,
    max_steps: usize,
) -> Result<Option<RoutePlan>> {
    let prepared = prepare(graph, request)?;
    if prepared.start == prepared.goal {
        return Ok(Some(trivial_plan(request.algorithm, prepared.start)));
    }

    let searched = prepared.constrained.as_ref().unwrap_or(graph);
    let outcome = match request.algorithm {
        RouteAlgorithm::Dijkstra => drive_budgeted(
            dijkstra_to_node(searched, prepared.start, prepared.goal),
            max_steps,
        ),
        RouteAlgorithm::AStar => drive_budgeted(
            astar_to_node(searched, prepared.start, prepared.goal),
            max_steps,
        ),
    };

    match outcome {
        BudgetedOutcome::StillRunning => Ok(None),
        BudgetedOutcome::Unreachable => Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        }),
        BudgetedOutcome::Solved(route) => {
            Ok(Some(plan_from_route(request.algorithm, prepared.goal, &route)))
        }
    }
}

enum BudgetedOutcome {
    StillRunning,
    Unreachable,
    Solved(Route),
}

fn drive_budgeted<H, G>(mut search: AStarSearch<'_, H, G>, max_steps: usize) -> BudgetedOutcome
where
    H: Heuristic,
    G: Fn(&Node) -> bool,
{
    for _ in 0..max_steps {
        if search.step().is_terminal() {
            break;
        }
    }

    match search.status() {
        SearchStatus::Running => BudgetedOutcome::StillRunning,
        SearchStatus::Failed => BudgetedOutcome::Unreachable,
        SearchStatus::Succeeded => match search.into_solution() {
            Some(route) => BudgetedOutcome::Solved(route),
            None => BudgetedOutcome::Unreachable,
        },
    }
}

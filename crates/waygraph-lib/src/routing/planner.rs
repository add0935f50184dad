//! Route planning strategies.
//!
//! Each algorithm is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so `plan_route` stays a pure orchestrator and
//! new algorithms slot in without modifying it.

use crate::graph::{NavGraph, NodeId};
use crate::path::Route;
use crate::search::{astar_to_node, dijkstra_to_node, IncrementalSearch, SearchStatus};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(route)` if the goal is reachable, `None` otherwise.
    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> Option<Route>;
}

/// Dijkstra planner: uniform best-first expansion, optimal on any
/// non-negative-cost graph.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> Option<Route> {
        let mut search = dijkstra_to_node(graph, start, goal);
        match search.run_to_completion() {
            SearchStatus::Succeeded => search.into_solution(),
            _ => None,
        }
    }
}

/// A* planner: straight-line-distance guidance toward the goal node.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> Option<Route> {
        let mut search = astar_to_node(graph, start, goal);
        match search.run_to_completion() {
            SearchStatus::Succeeded => search.into_solution(),
            _ => None,
        }
    }
}

/// Select the appropriate planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

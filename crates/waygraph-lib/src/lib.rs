//! Waygraph library entry points.
//!
//! This crate models navigation graphs for autonomous agents and computes
//! movement paths over them with an incremental best-first search engine
//! (Dijkstra/A*-family). Searches can run to completion or in bounded
//! per-step increments, so a caller embedded in a real-time update loop
//! never blocks on an unbounded expansion. Higher-level consumers (the CLI,
//! embedding agents) should depend on the types exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod path;
pub mod queue;
pub mod routing;
pub mod search;

pub use dataset::{load_graph, GraphDescription};
pub use error::{Error, Result};
pub use graph::{Edge, NavGraph, Node, NodeId, Position};
pub use heuristic::{Euclidean, Heuristic, Zero};
pub use path::{PathArena, PathData, RecordId, Route};
pub use queue::{FloatOrd, IndexedPriorityQueue};
pub use routing::{
    plan_route, plan_route_budgeted, RouteAlgorithm, RouteConstraints, RoutePlan, RoutePlanner,
    RouteRequest,
};
pub use search::{astar_to_node, dijkstra_to_node, AStarSearch, IncrementalSearch, SearchStatus};

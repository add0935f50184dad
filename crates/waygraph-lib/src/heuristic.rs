//! Heuristic strategies for best-first search.
//!
//! A heuristic estimates the remaining cost from a node to the goal. It must
//! be non-negative and stateless with respect to the search's own
//! bookkeeping; it may close over a fixed goal, nothing else. Admissible
//! heuristics (never overestimating) make A* return optimal paths; the
//! engine does not attempt to detect violations, it just returns whatever
//! the inflated estimates steer it to.

use crate::graph::{Node, Position};

/// Estimated remaining cost from a node to the goal.
pub trait Heuristic {
    fn estimate(&self, node: &Node) -> f64;
}

/// Straight-line distance to a fixed goal position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean {
    goal: Option<Position>,
}

impl Euclidean {
    /// Bind the heuristic to a goal position.
    pub fn to_goal(goal: Position) -> Self {
        Self { goal: Some(goal) }
    }

    /// An unbound heuristic, estimating 0.0 everywhere.
    pub fn unbound() -> Self {
        Self { goal: None }
    }
}

impl Heuristic for Euclidean {
    fn estimate(&self, node: &Node) -> f64 {
        match self.goal {
            Some(goal) => node.position.distance_to(&goal),
            None => 0.0,
        }
    }
}

/// The zero heuristic. Degenerates A* into Dijkstra's algorithm, which is
/// optimal on any non-negative-cost graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _node: &Node) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NavGraph;

    fn graph_with_node(position: Position) -> NavGraph {
        let mut graph = NavGraph::new();
        graph.add_node("A", position).unwrap();
        graph
    }

    #[test]
    fn euclidean_measures_straight_line_distance() {
        let graph = graph_with_node(Position {
            x: 3.0,
            y: 4.0,
            z: 0.0,
        });
        let heuristic = Euclidean::to_goal(Position {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        });

        let node = graph.node(graph.node_id_by_name("A").unwrap());
        assert!((heuristic.estimate(node) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unbound_euclidean_estimates_zero() {
        let graph = graph_with_node(Position {
            x: 9.0,
            y: 9.0,
            z: 9.0,
        });
        let node = graph.node(graph.node_id_by_name("A").unwrap());
        assert_eq!(Euclidean::unbound().estimate(node), 0.0);
    }

    #[test]
    fn zero_estimates_zero_everywhere() {
        let graph = graph_with_node(Position {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        });
        let node = graph.node(graph.node_id_by_name("A").unwrap());
        assert_eq!(Zero.estimate(node), 0.0);
    }
}

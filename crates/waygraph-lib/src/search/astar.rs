use std::collections::HashMap;

use tracing::{debug, trace};

use crate::graph::{NavGraph, Node, NodeId};
use crate::heuristic::{Euclidean, Heuristic, Zero};
use crate::path::{PathArena, RecordId, Route};
use crate::queue::{FloatOrd, IndexedPriorityQueue};

use super::{IncrementalSearch, SearchStatus};

/// Best-first search over a [`NavGraph`], parameterised by heuristic and
/// goal predicate.
///
/// With an admissible heuristic this is A*; with [`Zero`] it is Dijkstra's
/// algorithm. The open set is an indexed priority queue ranked by
/// `f = g + h`, the closed set maps settled nodes to their finalized path
/// records. A settled node is re-opened if a later expansion proves its
/// recorded cost suboptimal, which keeps the result correct even when the
/// heuristic is not consistent.
///
/// The search borrows its graph shared and owns all of its bookkeeping, so
/// independent searches over the same graph never interfere.
pub struct AStarSearch<'g, H, G> {
    graph: &'g NavGraph,
    source: NodeId,
    heuristic: H,
    is_goal: G,
    open: IndexedPriorityQueue<NodeId, RecordId, FloatOrd>,
    closed: HashMap<NodeId, RecordId>,
    records: PathArena,
    status: SearchStatus,
    solution: Option<Route>,
}

impl<'g, H, G> AStarSearch<'g, H, G>
where
    H: Heuristic,
    G: Fn(&Node) -> bool,
{
    /// Create a search seeded with `source` at cost zero.
    pub fn new(graph: &'g NavGraph, source: NodeId, heuristic: H, is_goal: G) -> Self {
        let mut records = PathArena::new();
        let mut open = IndexedPriorityQueue::new();
        let root = records.push(0.0, None, None);
        let estimate = heuristic.estimate(graph.node(source));
        open.push(source, root, FloatOrd(estimate));

        Self {
            graph,
            source,
            heuristic,
            is_goal,
            open,
            closed: HashMap::new(),
            records,
            status: SearchStatus::Running,
            solution: None,
        }
    }

    /// Source node this search was seeded with.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of settled nodes.
    pub fn settled(&self) -> usize {
        self.closed.len()
    }

    /// Number of discovered-but-unsettled nodes.
    pub fn frontier(&self) -> usize {
        self.open.len()
    }

    /// Consume the search and take its solution, if one was found.
    pub fn into_solution(self) -> Option<Route> {
        self.solution
    }

    fn priority_for(&self, node: NodeId, g: f64) -> FloatOrd {
        FloatOrd(g + self.heuristic.estimate(self.graph.node(node)))
    }
}

impl<'g, H, G> IncrementalSearch for AStarSearch<'g, H, G>
where
    H: Heuristic,
    G: Fn(&Node) -> bool,
{
    fn step(&mut self) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let Some((node_id, record, _priority)) = self.open.pop_min() else {
            debug!(settled = self.closed.len(), "open set exhausted");
            self.status = SearchStatus::Failed;
            return self.status;
        };

        let node = self.graph.node(node_id);
        if (self.is_goal)(node) {
            let route = self.records.reconstruct(record, self.source);
            debug!(
                hops = route.len(),
                cost = route.total_cost,
                "goal dequeued"
            );
            self.solution = Some(route);
            self.status = SearchStatus::Succeeded;
            return self.status;
        }

        self.closed.insert(node_id, record);
        let g = self.records.g(record);
        trace!(node = node_id.0, g, "settled");

        for &edge in node.out_edges() {
            let neighbor = edge.to;
            let tentative = g + edge.cost;

            if let Some(closed_record) = self.closed.get(&neighbor).copied() {
                if self.records.g(closed_record) <= tentative {
                    continue;
                }
                // A cheaper route to a settled node: re-open it.
                self.closed.remove(&neighbor);
                let improved = self.records.push(tentative, Some(edge), Some(record));
                let priority = self.priority_for(neighbor, tentative);
                self.open.push(neighbor, improved, priority);
            } else if let Some(open_record) = self.open.get(&neighbor).map(|(id, _)| *id) {
                if self.records.g(open_record) <= tentative {
                    continue;
                }
                let improved = self.records.push(tentative, Some(edge), Some(record));
                let priority = self.priority_for(neighbor, tentative);
                self.open.update(&neighbor, improved, priority);
            } else {
                let discovered = self.records.push(tentative, Some(edge), Some(record));
                let priority = self.priority_for(neighbor, tentative);
                self.open.push(neighbor, discovered, priority);
            }
        }

        self.status
    }

    fn status(&self) -> SearchStatus {
        self.status
    }

    fn solution(&self) -> Option<&Route> {
        self.solution.as_ref()
    }
}

/// A* between two concrete nodes, with the straight-line heuristic bound to
/// the goal's position.
pub fn astar_to_node(
    graph: &NavGraph,
    source: NodeId,
    goal: NodeId,
) -> AStarSearch<'_, Euclidean, impl Fn(&Node) -> bool> {
    let heuristic = Euclidean::to_goal(graph.node(goal).position);
    AStarSearch::new(graph, source, heuristic, move |node: &Node| node.id == goal)
}

/// Dijkstra between two concrete nodes.
pub fn dijkstra_to_node(
    graph: &NavGraph,
    source: NodeId,
    goal: NodeId,
) -> AStarSearch<'_, Zero, impl Fn(&Node) -> bool> {
    AStarSearch::new(graph, source, Zero, move |node: &Node| node.id == goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;

    fn flat(x: f64) -> Position {
        Position { x, y: 0.0, z: 0.0 }
    }

    fn line_graph() -> (NavGraph, NodeId, NodeId, NodeId) {
        let mut graph = NavGraph::new();
        let a = graph.add_node("A", flat(0.0)).unwrap();
        let b = graph.add_node("B", flat(1.0)).unwrap();
        let c = graph.add_node("C", flat(2.0)).unwrap();
        graph.add_edge(a, b, 1.0).unwrap();
        graph.add_edge(b, c, 1.0).unwrap();
        (graph, a, b, c)
    }

    #[test]
    fn search_starts_running_with_seeded_source() {
        let (graph, a, _, c) = line_graph();
        let search = astar_to_node(&graph, a, c);
        assert_eq!(search.status(), SearchStatus::Running);
        assert_eq!(search.frontier(), 1);
        assert_eq!(search.settled(), 0);
        assert_eq!(search.source(), a);
    }

    #[test]
    fn line_graph_resolves_in_order() {
        let (graph, a, b, c) = line_graph();
        let mut search = astar_to_node(&graph, a, c);

        assert_eq!(search.step(), SearchStatus::Running); // settles A
        assert_eq!(search.step(), SearchStatus::Running); // settles B
        assert_eq!(search.step(), SearchStatus::Succeeded); // dequeues C

        let route = search.solution().expect("solution available");
        assert_eq!(route.nodes(), vec![a, b, c]);
        assert_eq!(route.total_cost, 2.0);
    }

    #[test]
    fn terminal_status_is_sticky() {
        let (graph, a, _, c) = line_graph();
        let mut search = dijkstra_to_node(&graph, a, c);
        assert_eq!(search.run_to_completion(), SearchStatus::Succeeded);

        let settled = search.settled();
        assert_eq!(search.step(), SearchStatus::Succeeded);
        assert_eq!(search.settled(), settled);
    }

    #[test]
    fn source_matching_goal_succeeds_without_settling() {
        let (graph, a, _, _) = line_graph();
        let mut search = dijkstra_to_node(&graph, a, a);
        assert_eq!(search.step(), SearchStatus::Succeeded);
        assert_eq!(search.settled(), 0);
        assert!(search.solution().unwrap().is_empty());
    }

    #[test]
    fn disconnected_goal_fails() {
        let mut graph = NavGraph::new();
        let a = graph.add_node("A", flat(0.0)).unwrap();
        let b = graph.add_node("B", flat(1.0)).unwrap();

        let mut search = dijkstra_to_node(&graph, a, b);
        assert_eq!(search.run_to_completion(), SearchStatus::Failed);
        assert!(search.solution().is_none());
    }
}

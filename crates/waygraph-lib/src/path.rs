//! Per-node path bookkeeping.
//!
//! Every discovered node gets a [`PathData`] record: its cost-so-far, the
//! edge it was reached by, and the record of its predecessor. Records live
//! in an append-only arena and refer to their parents by index, which keeps
//! the implicit path tree free of ownership cycles. When relaxation finds a
//! cheaper route to a node, a fresh record is appended and the old one is
//! simply left orphaned.

use serde::Serialize;

use crate::graph::{Edge, NodeId};

/// Index of a [`PathData`] record within its [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(u32);

/// Bookkeeping for one discovered node.
#[derive(Debug, Clone, Copy)]
pub struct PathData {
    /// Accumulated cost from the search source to this node.
    pub g: f64,
    /// Edge used to reach this node; `None` only for the source record.
    pub edge_from_parent: Option<Edge>,
    /// Predecessor record; `None` only for the source record.
    pub parent: Option<RecordId>,
}

/// Append-only arena of path records for a single search.
#[derive(Debug, Default)]
pub struct PathArena {
    records: Vec<PathData>,
}

impl PathArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its index.
    pub fn push(
        &mut self,
        g: f64,
        edge_from_parent: Option<Edge>,
        parent: Option<RecordId>,
    ) -> RecordId {
        let id = RecordId(self.records.len() as u32);
        self.records.push(PathData {
            g,
            edge_from_parent,
            parent,
        });
        id
    }

    pub fn get(&self, id: RecordId) -> &PathData {
        &self.records[id.0 as usize]
    }

    /// Cost-so-far stored on a record.
    pub fn g(&self, id: RecordId) -> f64 {
        self.get(id).g
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Walk the parent chain from `goal` back to the source record and
    /// return the traversed edges in source-to-goal order.
    pub fn reconstruct(&self, goal: RecordId, source: NodeId) -> Route {
        let mut edges = Vec::new();
        let mut current = self.get(goal);
        while let Some(edge) = current.edge_from_parent {
            edges.push(edge);
            match current.parent {
                Some(parent) => current = self.get(parent),
                None => break,
            }
        }
        edges.reverse();

        Route {
            source,
            edges,
            total_cost: self.g(goal),
        }
    }
}

/// An ordered edge sequence from the search source to a goal node.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub source: NodeId,
    pub edges: Vec<Edge>,
    pub total_cost: f64,
}

impl Route {
    /// Number of edges in the route.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// A route is empty when source and goal coincide.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Visited nodes in order, source first.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(self.source);
        nodes.extend(self.edges.iter().map(|edge| edge.to));
        nodes
    }

    /// Goal node of the route.
    pub fn goal(&self) -> NodeId {
        self.edges.last().map(|edge| edge.to).unwrap_or(self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: u32, to: u32, cost: f64) -> Edge {
        Edge {
            from: NodeId(from),
            to: NodeId(to),
            cost,
        }
    }

    #[test]
    fn reconstruct_orders_edges_source_to_goal() {
        let mut arena = PathArena::new();
        let source = arena.push(0.0, None, None);
        let middle = arena.push(1.0, Some(edge(0, 1, 1.0)), Some(source));
        let goal = arena.push(2.0, Some(edge(1, 2, 1.0)), Some(middle));

        let route = arena.reconstruct(goal, NodeId(0));
        assert_eq!(route.total_cost, 2.0);
        assert_eq!(route.nodes(), vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(route.goal(), NodeId(2));
    }

    #[test]
    fn reconstruct_of_source_record_is_empty_route() {
        let mut arena = PathArena::new();
        let source = arena.push(0.0, None, None);

        let route = arena.reconstruct(source, NodeId(4));
        assert!(route.is_empty());
        assert_eq!(route.total_cost, 0.0);
        assert_eq!(route.nodes(), vec![NodeId(4)]);
        assert_eq!(route.goal(), NodeId(4));
    }

    #[test]
    fn superseded_records_stay_orphaned() {
        let mut arena = PathArena::new();
        let source = arena.push(0.0, None, None);
        let expensive = arena.push(9.0, Some(edge(0, 1, 9.0)), Some(source));
        let cheap = arena.push(2.0, Some(edge(0, 1, 2.0)), Some(source));

        // Both records exist; reconstruction follows whichever the caller
        // still holds.
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.g(expensive), 9.0);
        let route = arena.reconstruct(cheap, NodeId(0));
        assert_eq!(route.total_cost, 2.0);
        assert_eq!(route.len(), 1);
    }
}

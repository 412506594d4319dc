//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is scanned linearly for the closest unfinalized node, taking
//! the first minimum in insertion order. Only the distances are guaranteed;
//! which predecessor is kept among equal-length paths follows that scan.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::node::NodeId;
use crate::Weight;

/// Distances and predecessors from one source node.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    /// Every node of the graph, in insertion order.
    order: Vec<NodeId>,
    distances: HashMap<NodeId, Weight>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPaths {
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Minimum total weight from the source, `f64::INFINITY` when unreachable.
    ///
    /// `None` only for a handle that is not part of the graph.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(&node).copied()
    }

    /// Previous node on a shortest path to `node`. `None` for the source and
    /// for unreachable nodes.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some_and(Weight::is_finite)
    }

    /// Nodes of a shortest path from the source to `target`, both included.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_graph::{samples, shortest_paths};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let graph = samples::weighted_route(false)?;
    /// let a = graph.find_by_label("A").ok_or("missing A")?;
    /// let d = graph.find_by_label("D").ok_or("missing D")?;
    ///
    /// let paths = shortest_paths(&graph, a)?;
    /// let route = paths.path_to(d).ok_or("unreachable")?;
    /// let labels: Vec<&str> = route
    ///     .iter()
    ///     .map(|id| graph.label(*id))
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(labels, ["A", "B", "E", "D"]);
    /// assert_eq!(paths.distance(d), Some(7.0));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path: Vec<NodeId> =
            std::iter::successors(Some(target), |node| self.predecessor(*node))
                .take(self.order.len())
                .collect();
        path.reverse();

        (path.first() == Some(&self.source)).then_some(path)
    }

    /// `(node, distance, predecessor)` for every node in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Weight, Option<NodeId>)> + '_ {
        self.order.iter().map(|node| {
            (
                *node,
                self.distance(*node).unwrap_or(Weight::INFINITY),
                self.predecessor(*node),
            )
        })
    }
}

/// Dijkstra's algorithm from `start` over non-negative weights.
///
/// Every node of the graph receives a distance; nodes that cannot be reached
/// keep `f64::INFINITY` and no predecessor.
///
/// # Errors
///
/// * [`GraphError::NodeNotFound`] if `start` is not part of `graph`
/// * [`GraphError::NegativeWeight`] if any edge weight is negative
/// * [`GraphError::DistanceOverflow`] if a reachable node's shortest path
///   length exceeds `f64::MAX`
pub fn shortest_paths(graph: &Graph, start: NodeId) -> GraphResult<ShortestPaths> {
    graph.ensure(start)?;
    reject_negative_weights(graph)?;

    let order: Vec<NodeId> = graph.node_ids().collect();
    let mut distances: HashMap<NodeId, Weight> = order
        .iter()
        .map(|node| (*node, Weight::INFINITY))
        .collect();
    distances.insert(start, 0.0);
    let mut predecessors = HashMap::new();
    let mut frontier = order.clone();
    let mut overflowed = Vec::new();

    while let Some((position, current, current_distance)) = closest(&frontier, &distances) {
        frontier.remove(position);
        if current_distance.is_infinite() {
            // everything left in the frontier is unreachable
            break;
        }
        trace!(node = %current, distance = current_distance, "Finalized node");

        for adjacency in graph.adjacency_of(current) {
            let Some(weight) = graph.weight(adjacency.edge()) else {
                continue;
            };
            let target = adjacency.target();
            let candidate = current_distance + weight;
            if candidate.is_infinite() {
                overflowed.push(target);
                continue;
            }
            let known = distances.get(&target).copied().unwrap_or(Weight::INFINITY);
            if candidate < known {
                distances.insert(target, candidate);
                predecessors.insert(target, current);
            }
        }
    }

    // an overflow only matters if no finite path reached the node either
    if let Some(node) = overflowed
        .into_iter()
        .find(|node| distances.get(node).is_some_and(|d| d.is_infinite()))
    {
        return Err(GraphError::distance_overflow(node));
    }

    debug!(
        %start,
        reachable = distances.values().filter(|d| d.is_finite()).count(),
        "Shortest paths computed"
    );

    Ok(ShortestPaths {
        source: start,
        order,
        distances,
        predecessors,
    })
}

/// First frontier entry with the minimum tentative distance.
fn closest(
    frontier: &[NodeId],
    distances: &HashMap<NodeId, Weight>,
) -> Option<(usize, NodeId, Weight)> {
    frontier
        .iter()
        .enumerate()
        .map(|(position, node)| {
            let distance = distances.get(node).copied().unwrap_or(Weight::INFINITY);
            (position, *node, distance)
        })
        .reduce(|best, candidate| if candidate.2 < best.2 { candidate } else { best })
}

fn reject_negative_weights(graph: &Graph) -> GraphResult<()> {
    graph
        .edges()
        .find(|(_, _, _, weight)| *weight < 0.0)
        .map_or(Ok(()), |(_, from, to, weight)| {
            Err(GraphError::negative_weight(from, to, weight))
        })
}

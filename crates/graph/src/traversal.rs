//! Breadth-first and depth-first traversal.
//!
//! Both visit every node reachable from the start exactly once and never
//! report nodes outside the start's reach. Neighbours are considered in
//! adjacency-list order.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::node::{Node, NodeId};

/// DFS stack frame: a node and the next adjacency position to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next: usize,
}

/// Level-order traversal from `start`.
///
/// Nodes are visited in non-decreasing hop distance; ties follow the order in
/// which they were enqueued.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not part of `graph`.
///
/// # Examples
///
/// ```
/// use discrete_graph::{bfs, samples};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = samples::traversal_tree(false)?;
/// let start = graph.find_by_label("A").ok_or("missing A")?;
///
/// let mut labels = Vec::new();
/// bfs(&graph, start, |_, node| labels.push(node.label().to_string()))?;
/// assert_eq!(labels, ["A", "B", "C", "D", "E", "F"]);
/// # Ok(())
/// # }
/// ```
pub fn bfs<F>(graph: &Graph, start: NodeId, mut visit: F) -> GraphResult<()>
where
    F: FnMut(NodeId, &Node),
{
    graph.ensure(start)?;

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        visit(current, graph.node(current)?);

        for adjacency in graph.adjacency_of(current) {
            let target = adjacency.target();
            if visited.insert(target) {
                queue.push_back(target);
            }
        }
    }

    debug!(%start, visited = visited.len(), "Breadth-first traversal finished");
    Ok(())
}

/// Pre-order depth-first traversal from `start`.
///
/// Always descends into the first unvisited neighbour before backtracking.
/// Runs on an explicit stack, so long paths do not grow the call stack.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// `start` is not part of `graph`.
pub fn dfs<F>(graph: &Graph, start: NodeId, mut visit: F) -> GraphResult<()>
where
    F: FnMut(NodeId, &Node),
{
    let start_node = graph.node(start)?;

    let mut visited = HashSet::from([start]);
    visit(start, start_node);
    let mut stack = vec![Frame {
        node: start,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let next = graph
            .adjacency_of(frame.node)
            .iter()
            .enumerate()
            .skip(frame.next)
            .find(|(_, adjacency)| !visited.contains(&adjacency.target()))
            .map(|(position, adjacency)| (position, adjacency.target()));

        match next {
            Some((position, target)) => {
                frame.next = position.saturating_add(1);
                visited.insert(target);
                visit(target, graph.node(target)?);
                stack.push(Frame {
                    node: target,
                    next: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(%start, visited = visited.len(), "Depth-first traversal finished");
    Ok(())
}

/// Breadth-first visitation order from `start`.
///
/// # Errors
///
/// Same as [`bfs`].
pub fn bfs_order(graph: &Graph, start: NodeId) -> GraphResult<Vec<NodeId>> {
    let mut order = Vec::with_capacity(graph.node_count());
    bfs(graph, start, |id, _| order.push(id))?;
    Ok(order)
}

/// Depth-first visitation order from `start`.
///
/// # Errors
///
/// Same as [`dfs`].
pub fn dfs_order(graph: &Graph, start: NodeId) -> GraphResult<Vec<NodeId>> {
    let mut order = Vec::with_capacity(graph.node_count());
    dfs(graph, start, |id, _| order.push(id))?;
    Ok(order)
}

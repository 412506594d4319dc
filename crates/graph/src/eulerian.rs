//! Eulerian path construction (Hierholzer).
//!
//! The walk consumes edges from a [`WorkingGraph`], a private copy of the
//! adjacency lists that is dropped when the call returns. The caller's graph
//! is only ever borrowed immutably.
//!
//! # Algorithm Overview
//!
//! - Nodes with an odd number of adjacency records must number 0 or 2.
//! - Start at the first odd node, or at the first node owning an edge.
//! - While the stack is non-empty, follow the last unused record of the top
//!   node (dropping the paired reverse record when undirected), or pop the
//!   top onto the output once it has no records left.
//! - The output, reversed, is the path.
//!
//! A start whose component does not hold every edge leaves records unused;
//! that is reported as "no path" rather than returning a partial walk.

use itertools::Itertools;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Adjacency, Graph};
use crate::node::NodeId;

/// Adjacency lists that the walk is allowed to consume.
#[derive(Debug)]
struct WorkingGraph {
    lists: Vec<Vec<Adjacency>>,
}

impl WorkingGraph {
    fn copy_of(graph: &Graph) -> Self {
        Self {
            lists: graph.adjacency_lists().to_vec(),
        }
    }

    /// Remove and return the last unused record of `node`.
    fn take_last(&mut self, node: NodeId) -> Option<Adjacency> {
        self.lists.get_mut(node.index())?.pop()
    }

    /// Remove the first record of `node` pointing back at `towards`.
    fn remove_first_towards(&mut self, node: NodeId, towards: NodeId) {
        if let Some(list) = self.lists.get_mut(node.index()) {
            if let Some(position) = list.iter().position(|adj| adj.target() == towards) {
                list.remove(position);
            }
        }
    }

    fn remaining(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}

/// Nodes whose adjacency list has odd length, in insertion order.
///
/// An undirected edge counts once at each endpoint; an undirected self-loop
/// counts twice at its node.
#[must_use]
pub fn odd_degree_nodes(graph: &Graph) -> Vec<NodeId> {
    graph
        .node_ids()
        .filter(|node| graph.adjacency_of(*node).len() % 2 != 0)
        .collect()
}

/// Find a walk that uses every edge exactly once.
///
/// Returns `Ok(None)` when the odd-degree count is neither 0 nor 2, or when
/// the edges cannot all be reached from the chosen start.
///
/// # Errors
///
/// Returns [`GraphError::EmptyGraph`] for a graph without nodes.
///
/// # Examples
///
/// ```
/// use discrete_graph::{eulerian_path, samples};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let square = samples::square_with_diagonal(false)?;
/// let walk = eulerian_path(&square)?.ok_or("expected a path")?;
/// assert_eq!(walk.len(), 6);
///
/// let k4 = samples::complete(4, false)?;
/// assert_eq!(eulerian_path(&k4)?, None);
/// # Ok(())
/// # }
/// ```
pub fn eulerian_path(graph: &Graph) -> GraphResult<Option<Vec<NodeId>>> {
    let first = graph.first_node().ok_or(GraphError::EmptyGraph)?;

    let odd = odd_degree_nodes(graph);
    let start = match odd.as_slice() {
        [] => graph
            .node_ids()
            .find(|node| !graph.adjacency_of(*node).is_empty())
            .unwrap_or(first),
        [first_odd, _] => *first_odd,
        _ => {
            debug!(odd = odd.len(), "No Eulerian path: odd-degree node count");
            return Ok(None);
        }
    };

    let mut working = WorkingGraph::copy_of(graph);
    let mut stack = vec![start];
    let mut path = Vec::with_capacity(graph.adjacency_record_count().saturating_add(1));

    while let Some(&current) = stack.last() {
        match working.take_last(current) {
            Some(adjacency) => {
                let next = adjacency.target();
                if !graph.is_directed() {
                    working.remove_first_towards(next, current);
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                path.push(current);
            }
        }
    }
    path.reverse();

    let unused = working.remaining();
    if unused > 0 {
        debug!(%start, unused, "No Eulerian path: edges unreachable from start");
        return Ok(None);
    }
    if !path
        .iter()
        .tuple_windows()
        .all(|(from, to)| graph.has_edge(*from, *to))
    {
        debug!(%start, "No Eulerian path: walk breaks arc direction");
        return Ok(None);
    }

    debug!(%start, length = path.len(), "Eulerian path found");
    Ok(Some(path))
}

//! Hamiltonian cycle search by exhaustive backtracking.
//!
//! Exponential in the worst case. Intended for hand-built graphs of a few
//! dozen nodes at most.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::node::NodeId;

/// Backtracking frame: a node on the current path and the next adjacency
/// position to try from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next: usize,
}

/// Find a closed walk visiting every node exactly once.
///
/// Start nodes are tried in insertion order and the first cycle found is
/// returned, with the start repeated at the end. `Ok(None)` when no start
/// node yields a cycle.
///
/// # Errors
///
/// Returns [`GraphError::EmptyGraph`] for a graph without nodes.
///
/// # Examples
///
/// ```
/// use discrete_graph::{hamiltonian_cycle, samples};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ring = samples::cycle(5, false)?;
/// let cycle = hamiltonian_cycle(&ring)?.ok_or("expected a cycle")?;
/// assert_eq!(cycle.len(), 6);
/// assert_eq!(cycle.first(), cycle.last());
///
/// let star = samples::star(4, false)?;
/// assert_eq!(hamiltonian_cycle(&star)?, None);
/// # Ok(())
/// # }
/// ```
pub fn hamiltonian_cycle(graph: &Graph) -> GraphResult<Option<Vec<NodeId>>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let total = graph.node_count();
    for start in graph.node_ids() {
        if let Some(cycle) = cycle_from(graph, start, total) {
            debug!(%start, length = cycle.len(), "Hamiltonian cycle found");
            return Ok(Some(cycle));
        }
        trace!(%start, "No Hamiltonian cycle from start");
    }

    debug!(nodes = total, "No Hamiltonian cycle");
    Ok(None)
}

fn cycle_from(graph: &Graph, start: NodeId, total: usize) -> Option<Vec<NodeId>> {
    let mut path = vec![start];
    let mut visited = HashSet::from([start]);
    let mut frames = vec![Frame {
        node: start,
        next: 0,
    }];

    while let Some(frame) = frames.last_mut() {
        let node = frame.node;

        if path.len() == total {
            if graph.has_edge(node, start) {
                path.push(start);
                return Some(path);
            }
            visited.remove(&node);
            path.pop();
            frames.pop();
            continue;
        }

        let next = graph
            .adjacency_of(node)
            .iter()
            .enumerate()
            .skip(frame.next)
            .find(|(_, adjacency)| !visited.contains(&adjacency.target()))
            .map(|(position, adjacency)| (position, adjacency.target()));

        match next {
            Some((position, target)) => {
                frame.next = position.saturating_add(1);
                visited.insert(target);
                path.push(target);
                frames.push(Frame {
                    node: target,
                    next: 0,
                });
            }
            None => {
                visited.remove(&node);
                path.pop();
                frames.pop();
            }
        }
    }

    None
}

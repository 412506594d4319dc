//! Ready-made graphs.
//!
//! The named samples are the figures of the graph-theory lessons, with the
//! canvas positions they were drawn at. The generators build the usual
//! families (paths, cycles, stars, complete graphs) laid out on a line.

use itertools::Itertools;

use crate::error::GraphResult;
use crate::graph::{Graph, DEFAULT_WEIGHT};
use crate::node::{Node, NodeId};
use crate::Weight;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SPACING: f64 = 60.0;

type NodeSpec<'a> = (&'a str, f64, f64);
type EdgeSpec<'a> = (&'a str, &'a str, Weight);

fn build(
    directed: bool,
    weighted: bool,
    nodes: &[NodeSpec<'_>],
    edges: &[EdgeSpec<'_>],
) -> GraphResult<Graph> {
    let mut graph = Graph::new(directed, weighted);
    for (label, x, y) in nodes {
        graph.add_node(Node::at(*label, *x, *y)?);
    }
    for (from, to, weight) in edges {
        let from = graph.require_label(from)?;
        let to = graph.require_label(to)?;
        graph.add_edge(from, to, *weight)?;
    }
    Ok(graph)
}

/// `A`..`Z`, then `v26`, `v27`, ...
fn label_for(index: usize) -> String {
    LETTERS
        .chars()
        .nth(index)
        .map_or_else(|| format!("v{index}"), String::from)
}

fn add_row(graph: &mut Graph, count: usize, y: f64) -> GraphResult<Vec<NodeId>> {
    let mut x = 0.0;
    let mut ids = Vec::with_capacity(count);
    for index in 0..count {
        ids.push(graph.add_node(Node::at(label_for(index), x, y)?));
        x += SPACING;
    }
    Ok(ids)
}

/// Square `A-B-C-D-A` with the diagonal `A-C`.
///
/// # Errors
///
/// Never fails for the built-in tables; errors would come from [`Graph::add_edge`].
pub fn square_with_diagonal(directed: bool) -> GraphResult<Graph> {
    build(
        directed,
        false,
        &[
            ("A", 150.0, 200.0),
            ("B", 300.0, 100.0),
            ("C", 450.0, 200.0),
            ("D", 300.0, 300.0),
        ],
        &[
            ("A", "B", DEFAULT_WEIGHT),
            ("B", "C", DEFAULT_WEIGHT),
            ("C", "D", DEFAULT_WEIGHT),
            ("D", "A", DEFAULT_WEIGHT),
            ("A", "C", DEFAULT_WEIGHT),
        ],
    )
}

/// Six nodes used to compare breadth-first and depth-first order.
///
/// # Errors
///
/// Never fails for the built-in tables.
pub fn traversal_tree(directed: bool) -> GraphResult<Graph> {
    build(
        directed,
        false,
        &[
            ("A", 300.0, 100.0),
            ("B", 150.0, 200.0),
            ("C", 450.0, 200.0),
            ("D", 300.0, 300.0),
            ("E", 150.0, 400.0),
            ("F", 450.0, 400.0),
        ],
        &[
            ("A", "B", DEFAULT_WEIGHT),
            ("A", "C", DEFAULT_WEIGHT),
            ("B", "D", DEFAULT_WEIGHT),
            ("C", "D", DEFAULT_WEIGHT),
            ("D", "E", DEFAULT_WEIGHT),
            ("D", "F", DEFAULT_WEIGHT),
        ],
    )
}

/// Weighted five-node map for shortest paths.
///
/// # Errors
///
/// Never fails for the built-in tables.
pub fn weighted_route(directed: bool) -> GraphResult<Graph> {
    build(
        directed,
        true,
        &[
            ("A", 100.0, 300.0),
            ("B", 200.0, 100.0),
            ("C", 400.0, 100.0),
            ("D", 500.0, 300.0),
            ("E", 300.0, 400.0),
        ],
        &[
            ("A", "B", 2.0),
            ("A", "E", 5.0),
            ("B", "C", 3.0),
            ("B", "E", 2.0),
            ("C", "D", 2.0),
            ("D", "E", 3.0),
        ],
    )
}

/// Square `1-2-3-4-1` with a hub `5` joined to `1` and `3`.
///
/// # Errors
///
/// Never fails for the built-in tables.
pub fn hub_square(directed: bool) -> GraphResult<Graph> {
    build(
        directed,
        false,
        &[
            ("1", 150.0, 200.0),
            ("2", 300.0, 100.0),
            ("3", 450.0, 200.0),
            ("4", 300.0, 300.0),
            ("5", 300.0, 200.0),
        ],
        &[
            ("1", "2", DEFAULT_WEIGHT),
            ("2", "3", DEFAULT_WEIGHT),
            ("3", "4", DEFAULT_WEIGHT),
            ("4", "1", DEFAULT_WEIGHT),
            ("1", "5", DEFAULT_WEIGHT),
            ("5", "3", DEFAULT_WEIGHT),
        ],
    )
}

/// `A-B-C`, the representation example.
///
/// # Errors
///
/// Never fails for the built-in tables.
pub fn simple_path(directed: bool) -> GraphResult<Graph> {
    build(
        directed,
        false,
        &[("A", 0.0, 0.0), ("B", 0.0, 0.0), ("C", 0.0, 0.0)],
        &[("A", "B", DEFAULT_WEIGHT), ("B", "C", DEFAULT_WEIGHT)],
    )
}

/// Path on `count` nodes.
///
/// # Errors
///
/// Propagates construction errors, which the generated coordinates never trigger.
pub fn path(count: usize, directed: bool) -> GraphResult<Graph> {
    let mut graph = Graph::new(directed, false);
    let ids = add_row(&mut graph, count, 0.0)?;
    for (from, to) in ids.iter().tuple_windows() {
        graph.connect(*from, *to)?;
    }
    Ok(graph)
}

/// Cycle on `count` nodes. Below three nodes this is just the path.
///
/// # Errors
///
/// Propagates construction errors, which the generated coordinates never trigger.
pub fn cycle(count: usize, directed: bool) -> GraphResult<Graph> {
    let mut graph = path(count, directed)?;
    let first = graph.first_node();
    let last = graph.node_ids().last();
    if let (true, Some(first), Some(last)) = (count >= 3, first, last) {
        graph.connect(last, first)?;
    }
    Ok(graph)
}

/// A `hub` joined to `leaves` leaf nodes, with no leaf-leaf edges.
///
/// # Errors
///
/// Propagates construction errors, which the generated coordinates never trigger.
pub fn star(leaves: usize, directed: bool) -> GraphResult<Graph> {
    let mut graph = Graph::new(directed, false);
    let hub = graph.add_node(Node::at("hub", 0.0, 0.0)?);
    for leaf in add_row(&mut graph, leaves, 100.0)? {
        graph.connect(hub, leaf)?;
    }
    Ok(graph)
}

/// Complete graph on `count` nodes. Directed arcs point from earlier to later nodes.
///
/// # Errors
///
/// Propagates construction errors, which the generated coordinates never trigger.
pub fn complete(count: usize, directed: bool) -> GraphResult<Graph> {
    let mut graph = Graph::new(directed, false);
    let ids = add_row(&mut graph, count, 0.0)?;
    for (from, to) in ids.iter().tuple_combinations() {
        graph.connect(*from, *to)?;
    }
    Ok(graph)
}

//! Matrix and list views of a graph.
//!
//! Rows and columns follow node insertion order. These are snapshots; they
//! do not track later mutation.

use itertools::Itertools;

use crate::graph::Graph;
use crate::node::NodeId;

/// `matrix[i][j] == 1` when node `i` has an adjacency record pointing at `j`.
///
/// Parallel edges collapse to a single `1`.
#[must_use]
pub fn adjacency_matrix(graph: &Graph) -> Vec<Vec<u8>> {
    let size = graph.node_count();
    graph
        .node_ids()
        .map(|node| {
            let mut row = vec![0_u8; size];
            for adjacency in graph.adjacency_of(node) {
                if let Some(cell) = row.get_mut(adjacency.target().index()) {
                    *cell = 1;
                }
            }
            row
        })
        .collect()
}

/// Each node's label with the labels of its neighbours, in adjacency order.
#[must_use]
pub fn adjacency_list(graph: &Graph) -> Vec<(String, Vec<String>)> {
    graph
        .nodes()
        .map(|(id, node)| {
            let neighbours = graph
                .adjacency_of(id)
                .iter()
                .filter_map(|adjacency| graph.label(adjacency.target()).ok())
                .map(str::to_string)
                .collect();
            (node.label().to_string(), neighbours)
        })
        .collect()
}

/// Node-by-edge incidence matrix.
///
/// Columns are logical edges in the order they are first met while scanning
/// nodes and their adjacency lists. Undirected edges mark both endpoints with
/// `1`; directed edges mark the source with `1` and the target with `-1`, the
/// target mark winning on a self-loop.
///
/// # Examples
///
/// ```
/// use discrete_graph::{incidence_matrix, samples};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = samples::simple_path(false)?;
/// assert_eq!(incidence_matrix(&graph), vec![vec![1, 0], vec![1, 1], vec![0, 1]]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn incidence_matrix(graph: &Graph) -> Vec<Vec<i8>> {
    let columns: Vec<(NodeId, NodeId)> = graph
        .node_ids()
        .flat_map(|node| {
            graph
                .adjacency_of(node)
                .iter()
                .map(move |adjacency| (node, *adjacency))
        })
        .unique_by(|(_, adjacency)| adjacency.edge())
        .map(|(from, adjacency)| (from, adjacency.target()))
        .collect();

    let target_mark = if graph.is_directed() { -1 } else { 1 };
    let mut matrix = vec![vec![0_i8; columns.len()]; graph.node_count()];

    for (column, (from, to)) in columns.iter().enumerate() {
        if let Some(cell) = matrix
            .get_mut(from.index())
            .and_then(|row| row.get_mut(column))
        {
            *cell = 1;
        }
        if let Some(cell) = matrix
            .get_mut(to.index())
            .and_then(|row| row.get_mut(column))
        {
            *cell = target_mark;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphResult;
    use crate::node::Node;
    use crate::samples;

    #[test]
    fn test_adjacency_matrix_is_symmetric_when_undirected() -> GraphResult<()> {
        let graph = samples::simple_path(false)?;
        assert_eq!(
            adjacency_matrix(&graph),
            vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]
        );
        Ok(())
    }

    #[test]
    fn test_adjacency_matrix_follows_arcs_when_directed() -> GraphResult<()> {
        let graph = samples::simple_path(true)?;
        assert_eq!(
            adjacency_matrix(&graph),
            vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]
        );
        Ok(())
    }

    #[test]
    fn test_adjacency_list_uses_labels_in_adjacency_order() -> GraphResult<()> {
        let graph = samples::simple_path(false)?;
        let list = adjacency_list(&graph);

        let expected = vec![
            ("A".to_string(), vec!["B".to_string()]),
            ("B".to_string(), vec!["A".to_string(), "C".to_string()]),
            ("C".to_string(), vec!["B".to_string()]),
        ];
        assert_eq!(list, expected);
        Ok(())
    }

    #[test]
    fn test_incidence_matrix_directed_marks_target_negative() -> GraphResult<()> {
        let graph = samples::simple_path(true)?;
        assert_eq!(
            incidence_matrix(&graph),
            vec![vec![1, 0], vec![-1, 1], vec![0, -1]]
        );
        Ok(())
    }

    #[test]
    fn test_incidence_matrix_keeps_parallel_edges_and_single_self_loop() -> GraphResult<()> {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));
        graph.connect(a, b)?;
        graph.connect(a, b)?;
        graph.connect(b, b)?;

        assert_eq!(
            incidence_matrix(&graph),
            vec![vec![1, 1, 0], vec![1, 1, 1]]
        );
        Ok(())
    }

    #[test]
    fn test_directed_self_loop_reads_negative() -> GraphResult<()> {
        let mut graph = Graph::new(true, false);
        let a = graph.add_node(Node::labeled("A"));
        graph.connect(a, a)?;

        assert_eq!(incidence_matrix(&graph), vec![vec![-1]]);
        assert_eq!(adjacency_matrix(&graph), vec![vec![1]]);
        Ok(())
    }

    #[test]
    fn test_empty_graph_has_empty_views() {
        let graph = Graph::default();
        assert!(adjacency_matrix(&graph).is_empty());
        assert!(adjacency_list(&graph).is_empty());
        assert!(incidence_matrix(&graph).is_empty());
    }
}

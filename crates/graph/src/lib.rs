//! # discrete-graph
//!
//! In-memory graph model and the algorithm suite built on it: breadth/depth
//! first traversal, single-source shortest paths, Eulerian path construction
//! and Hamiltonian cycle search.
//!
//! Graphs are built by adding [`Node`]s and then edges; every algorithm reads
//! the graph through a shared borrow and returns a plain value. "No path" and
//! "unreachable" are ordinary results, only caller mistakes are [`GraphError`]s.
//!
//! ```
//! use discrete_graph::{eulerian_path, shortest_paths, samples};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = samples::square_with_diagonal(false)?;
//! let a = graph.find_by_label("A").ok_or("missing A")?;
//!
//! let paths = shortest_paths(&graph, a)?;
//! assert_eq!(paths.distance(a), Some(0.0));
//!
//! let walk = eulerian_path(&graph)?.ok_or("no eulerian path")?;
//! assert_eq!(walk.len(), graph.edge_count() + 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

/// Numeric edge weight.
pub type Weight = f64;

pub mod error;
pub mod eulerian;
pub mod graph;
pub mod hamiltonian;
pub mod node;
pub mod representation;
pub mod samples;
pub mod shortest_path;
pub mod traversal;

pub use error::{GraphError, GraphResult};
pub use eulerian::{eulerian_path, odd_degree_nodes};
pub use graph::{Adjacency, Graph, GraphOptions, DEFAULT_HIT_RADIUS, DEFAULT_WEIGHT};
pub use hamiltonian::hamiltonian_cycle;
pub use node::{EdgeId, Node, NodeId, Position};
pub use representation::{adjacency_list, adjacency_matrix, incidence_matrix};
pub use shortest_path::{shortest_paths, ShortestPaths};
pub use traversal::{bfs, bfs_order, dfs, dfs_order};

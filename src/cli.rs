//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use clap::{Args, Parser, Subcommand, ValueEnum};
use discrete_graph::DEFAULT_HIT_RADIUS;

/// discrete - graph algorithms on the lesson figures
#[derive(Parser, Debug)]
#[command(name = "discrete")]
#[command(version)]
#[command(about = "Run graph traversals, shortest paths and circuit searches on sample graphs")]
#[command(
    long_about = "discrete builds one of the lesson graphs (or a generated path, cycle, star or complete graph) and runs a graph algorithm or prints one of its matrix and list representations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Largest node count accepted for generated samples.
pub const MAX_SIZE: u16 = 512;

/// Which graph to build.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Sample graph to load
    #[arg(long, value_enum, default_value_t = Sample::SquareWithDiagonal)]
    pub sample: Sample,

    /// Node count for generated samples (path, cycle, star leaves, complete)
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(0..=i64::from(MAX_SIZE))
    )]
    pub size: u16,

    /// Treat edges as one-way arcs
    #[arg(short, long, default_value_t = false)]
    pub directed: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the graph from a start node
    Traverse {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node label (defaults to the first node)
        #[arg(short, long)]
        start: Option<String>,

        /// Visiting order
        #[arg(long, value_enum, default_value_t = Order::Bfs)]
        order: Order,
    },

    /// Dijkstra distances and predecessors from a start node
    ShortestPath {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source node label (defaults to the first node)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Find a walk using every edge exactly once
    Eulerian {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Find a cycle visiting every node exactly once
    Hamiltonian {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print a matrix or list representation
    Represent {
        #[command(flatten)]
        graph: GraphArgs,

        /// Representation to print
        #[arg(short, long, value_enum, default_value_t = Format::AdjacencyMatrix)]
        format: Format,
    },

    /// Find the node under a canvas point
    Near {
        #[command(flatten)]
        graph: GraphArgs,

        /// Canvas x coordinate
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Canvas y coordinate
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Hit radius (exclusive)
        #[arg(long, default_value_t = DEFAULT_HIT_RADIUS)]
        radius: f64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A-B-C-D-A with the A-C diagonal
    SquareWithDiagonal,
    /// Six nodes A..F for comparing traversal orders
    TraversalTree,
    /// Weighted five-node map
    WeightedRoute,
    /// Square 1-2-3-4 with hub 5
    HubSquare,
    /// A-B-C
    SimplePath,
    /// Generated path of --size nodes
    Path,
    /// Generated cycle of --size nodes
    Cycle,
    /// Generated star with --size leaves
    Star,
    /// Generated complete graph of --size nodes
    Complete,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Bfs,
    Dfs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    AdjacencyMatrix,
    AdjacencyList,
    IncidenceMatrix,
}

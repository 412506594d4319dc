//! CLI command handlers.
//!
//! Every handler builds the requested sample graph, runs one algorithm and
//! renders the result as plain text. Nothing is printed here; the caller
//! decides where the output goes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt::Write as _;

use anyhow::{Context, Result};
use discrete_graph::{
    adjacency_list, adjacency_matrix, bfs_order, dfs_order, eulerian_path, hamiltonian_cycle,
    incidence_matrix, samples, shortest_paths, Graph, GraphError, GraphResult, NodeId, Position,
};
use itertools::Itertools;
use tracing::{debug, info};

use crate::cli::{Commands, Format, GraphArgs, Order, Sample};

/// Execute a CLI command and return its rendered output.
///
/// This is the main command dispatcher that routes to the appropriate handler.
///
/// # Errors
///
/// Fails when the sample cannot be built, a start label is unknown, or the
/// algorithm rejects the graph (empty graph, negative weights).
pub fn execute_command(command: Commands) -> Result<String> {
    match command {
        Commands::Traverse {
            graph,
            start,
            order,
        } => cmd_traverse(&graph, start.as_deref(), order),

        Commands::ShortestPath { graph, start } => cmd_shortest_path(&graph, start.as_deref()),

        Commands::Eulerian { graph } => cmd_eulerian(&graph),

        Commands::Hamiltonian { graph } => cmd_hamiltonian(&graph),

        Commands::Represent { graph, format } => cmd_represent(&graph, format),

        Commands::Near {
            graph,
            x,
            y,
            radius,
        } => cmd_near(&graph, x, y, radius),
    }
}

/// Build the graph selected by `--sample`, `--size` and `--directed`.
///
/// # Errors
///
/// Propagates construction errors from the sample builders.
pub fn build_sample(args: &GraphArgs) -> GraphResult<Graph> {
    let directed = args.directed;
    let size = usize::from(args.size);
    match args.sample {
        Sample::SquareWithDiagonal => samples::square_with_diagonal(directed),
        Sample::TraversalTree => samples::traversal_tree(directed),
        Sample::WeightedRoute => samples::weighted_route(directed),
        Sample::HubSquare => samples::hub_square(directed),
        Sample::SimplePath => samples::simple_path(directed),
        Sample::Path => samples::path(size, directed),
        Sample::Cycle => samples::cycle(size, directed),
        Sample::Star => samples::star(size, directed),
        Sample::Complete => samples::complete(size, directed),
    }
}

fn load(args: &GraphArgs) -> Result<Graph> {
    let graph = build_sample(args)
        .with_context(|| format!("Failed to build sample {:?}", args.sample))?;
    info!(
        sample = ?args.sample,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "Loaded sample graph"
    );
    Ok(graph)
}

fn resolve_start(graph: &Graph, label: Option<&str>) -> Result<NodeId> {
    match label {
        Some(label) => graph
            .require_label(label)
            .with_context(|| format!("Unknown start node '{label}'")),
        None => graph
            .first_node()
            .ok_or(GraphError::EmptyGraph)
            .context("Graph has no nodes to start from"),
    }
}

fn render_walk(graph: &Graph, walk: &[NodeId]) -> Result<String> {
    let labels: Vec<&str> = walk
        .iter()
        .map(|id| graph.label(*id))
        .collect::<GraphResult<_>>()?;
    Ok(labels.join(" -> "))
}

fn cmd_traverse(args: &GraphArgs, start: Option<&str>, order: Order) -> Result<String> {
    let graph = load(args)?;
    let start = resolve_start(&graph, start)?;

    let (name, visited) = match order {
        Order::Bfs => ("BFS", bfs_order(&graph, start)?),
        Order::Dfs => ("DFS", dfs_order(&graph, start)?),
    };
    debug!(order = name, visited = visited.len(), "Traversal complete");

    Ok(format!(
        "{name} from {}: {}",
        graph.label(start)?,
        render_walk(&graph, &visited)?
    ))
}

fn cmd_shortest_path(args: &GraphArgs, start: Option<&str>) -> Result<String> {
    let graph = load(args)?;
    let start = resolve_start(&graph, start)?;
    let paths = shortest_paths(&graph, start).context("Shortest path computation failed")?;

    let mut output = format!("Shortest paths from {}:", graph.label(start)?);
    for (node, distance, predecessor) in paths.iter() {
        let label = graph.label(node)?;
        let via = match predecessor {
            Some(previous) => graph.label(previous)?,
            None => "-",
        };
        if distance.is_finite() {
            write!(output, "\n  {label}: {distance} (via {via})")?;
        } else {
            write!(output, "\n  {label}: unreachable")?;
        }
    }
    Ok(output)
}

fn cmd_eulerian(args: &GraphArgs) -> Result<String> {
    let graph = load(args)?;
    match eulerian_path(&graph).context("Eulerian path search failed")? {
        Some(walk) => Ok(format!("Eulerian path: {}", render_walk(&graph, &walk)?)),
        None => Ok("No Eulerian path".to_string()),
    }
}

fn cmd_hamiltonian(args: &GraphArgs) -> Result<String> {
    let graph = load(args)?;
    match hamiltonian_cycle(&graph).context("Hamiltonian cycle search failed")? {
        Some(cycle) => Ok(format!("Hamiltonian cycle: {}", render_walk(&graph, &cycle)?)),
        None => Ok("No Hamiltonian cycle".to_string()),
    }
}

fn cmd_represent(args: &GraphArgs, format: Format) -> Result<String> {
    let graph = load(args)?;
    let labels: Vec<&str> = graph.nodes().map(|(_, node)| node.label()).collect();

    let output = match format {
        Format::AdjacencyMatrix => render_matrix(&labels, &adjacency_matrix(&graph)),
        Format::IncidenceMatrix => render_matrix(&labels, &incidence_matrix(&graph)),
        Format::AdjacencyList => adjacency_list(&graph)
            .into_iter()
            .map(|(label, neighbours)| format!("{label}: {}", neighbours.join(", ")))
            .join("\n"),
    };
    Ok(output)
}

/// One row per node, prefixed with its label.
fn render_matrix<T: std::fmt::Display>(labels: &[&str], matrix: &[Vec<T>]) -> String {
    labels
        .iter()
        .zip(matrix)
        .map(|(label, row)| format!("{label}: {}", row.iter().join(" ")))
        .join("\n")
}

fn cmd_near(args: &GraphArgs, x: f64, y: f64, radius: f64) -> Result<String> {
    let graph = load(args)?;
    let point = Position::new(x, y).context("Invalid canvas point")?;

    match graph.find_node_near(point, radius) {
        Some(id) => Ok(graph.label(id)?.to_string()),
        None => Ok(format!("No node within {radius} of ({x}, {y})")),
    }
}

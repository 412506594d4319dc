//! Integration tests for the command-line front end.
//!
//! These tests verify that:
//! - Arguments parse into the expected commands and defaults
//! - Each command renders the algorithm result as plain text
//! - Caller errors (unknown labels, empty graphs) surface as errors

#![forbid(clippy::unwrap_used)]
#![forbid(clippy::expect_used)]
#![forbid(clippy::panic)]

use clap::Parser;

use discrete::cli::{Cli, Commands, Format, Order, Sample, MAX_SIZE};
use discrete::commands::execute_command;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("discrete").chain(args.iter().copied()))?;
    execute_command(cli.command)
}

/// # GIVEN
/// A traverse invocation with no flags beyond the subcommand
///
/// # WHEN
/// It is parsed
///
/// # THEN
/// The square sample, BFS order and first-node start are the defaults
#[test]
fn test_traverse_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["discrete", "traverse"])?;

    match cli.command {
        Commands::Traverse {
            graph,
            start,
            order,
        } => {
            assert_eq!(graph.sample, Sample::SquareWithDiagonal);
            assert!(!graph.directed);
            assert_eq!(start, None);
            assert_eq!(order, Order::Bfs);
        }
        other => return Err(format!("unexpected command {other:?}").into()),
    }
    Ok(())
}

#[test]
fn test_represent_parses_format_and_sample() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from([
        "discrete",
        "represent",
        "--sample",
        "simple-path",
        "--format",
        "incidence-matrix",
        "--directed",
    ])?;

    match cli.command {
        Commands::Represent { graph, format } => {
            assert_eq!(graph.sample, Sample::SimplePath);
            assert!(graph.directed);
            assert_eq!(format, Format::IncidenceMatrix);
        }
        other => return Err(format!("unexpected command {other:?}").into()),
    }
    Ok(())
}

#[test]
fn test_unknown_sample_is_rejected_by_parser() {
    let result = Cli::try_parse_from(["discrete", "eulerian", "--sample", "petersen"]);
    assert!(result.is_err());
}

/// # GIVEN
/// A generated sample size far beyond the supported maximum
///
/// # WHEN
/// It is parsed
///
/// # THEN
/// The parser rejects it before any graph is built, while the maximum itself
/// is accepted
#[test]
fn test_size_is_bounded_by_parser() -> Result<(), Box<dyn std::error::Error>> {
    let huge = Cli::try_parse_from(["discrete", "hamiltonian", "--sample", "complete", "--size", "100000"]);
    assert!(huge.is_err());

    let limit = MAX_SIZE.to_string();
    let cli = Cli::try_parse_from(["discrete", "eulerian", "--sample", "path", "--size", limit.as_str()])?;
    match cli.command {
        Commands::Eulerian { graph } => assert_eq!(graph.size, MAX_SIZE),
        other => return Err(format!("unexpected command {other:?}").into()),
    }
    Ok(())
}

#[test]
fn test_traverse_tree_in_both_orders() -> anyhow::Result<()> {
    let bfs = run(&["traverse", "--sample", "traversal-tree", "--start", "A"])?;
    let dfs = run(&[
        "traverse",
        "--sample",
        "traversal-tree",
        "--order",
        "dfs",
    ])?;

    assert_eq!(bfs, "BFS from A: A -> B -> C -> D -> E -> F");
    assert_eq!(dfs, "DFS from A: A -> B -> D -> C -> E -> F");
    Ok(())
}

#[test]
fn test_shortest_path_table() -> anyhow::Result<()> {
    let output = run(&["shortest-path", "--sample", "weighted-route", "--start", "A"])?;

    let expected = [
        "Shortest paths from A:",
        "  A: 0 (via -)",
        "  B: 2 (via A)",
        "  C: 5 (via B)",
        "  D: 7 (via E)",
        "  E: 4 (via B)",
    ]
    .join("\n");
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_shortest_path_marks_unreachable_nodes() -> anyhow::Result<()> {
    let output = run(&[
        "shortest-path",
        "--sample",
        "simple-path",
        "--directed",
        "--start",
        "B",
    ])?;

    assert!(output.contains("  A: unreachable"), "{output}");
    assert!(output.contains("  C: 1 (via B)"), "{output}");
    Ok(())
}

#[test]
fn test_eulerian_square_and_k4() -> anyhow::Result<()> {
    let square = run(&["eulerian"])?;
    let k4 = run(&["eulerian", "--sample", "complete", "--size", "4"])?;

    assert_eq!(square, "Eulerian path: A -> C -> D -> A -> B -> C");
    assert_eq!(k4, "No Eulerian path");
    Ok(())
}

#[test]
fn test_hamiltonian_cycle_and_star() -> anyhow::Result<()> {
    let ring = run(&["hamiltonian", "--sample", "cycle", "--size", "5"])?;
    let star = run(&["hamiltonian", "--sample", "star", "--size", "4"])?;

    assert_eq!(ring, "Hamiltonian cycle: A -> B -> C -> D -> E -> A");
    assert_eq!(star, "No Hamiltonian cycle");
    Ok(())
}

#[test]
fn test_represent_outputs() -> anyhow::Result<()> {
    let matrix = run(&["represent", "--sample", "simple-path"])?;
    let list = run(&[
        "represent",
        "--sample",
        "simple-path",
        "--format",
        "adjacency-list",
    ])?;
    let incidence = run(&[
        "represent",
        "--sample",
        "simple-path",
        "--format",
        "incidence-matrix",
        "--directed",
    ])?;

    assert_eq!(matrix, "A: 0 1 0\nB: 1 0 1\nC: 0 1 0");
    assert_eq!(list, "A: B\nB: A, C\nC: B");
    assert_eq!(incidence, "A: 1 0\nB: -1 1\nC: 0 -1");
    Ok(())
}

#[test]
fn test_near_hits_and_misses() -> anyhow::Result<()> {
    let hit = run(&["near", "--x", "452", "--y", "195"])?;
    let miss = run(&["near", "--x", "452", "--y", "195", "--radius", "1"])?;

    assert_eq!(hit, "C");
    assert!(miss.starts_with("No node within 1"), "{miss}");
    Ok(())
}

/// # GIVEN
/// A start label that no node carries
///
/// # WHEN
/// A traversal is requested from it
///
/// # THEN
/// The command fails and names the label
#[test]
fn test_unknown_start_label_is_an_error() {
    let result = run(&["traverse", "--start", "Z"]);

    let message = result.err().map(|error| format!("{error:#}"));
    assert!(
        message.as_deref().is_some_and(|m| m.contains("'Z'")),
        "unexpected result {message:?}"
    );
}

#[test]
fn test_empty_generated_graph_is_an_error() {
    let result = run(&["hamiltonian", "--sample", "complete", "--size", "0"]);
    assert!(result.is_err());
}

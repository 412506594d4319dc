#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # discrete
//!
//! Command-line front end for the `discrete-graph` algorithm suite.
//!
//! This library re-exports the graph crate so the binary and its tests share
//! one import path.

pub use discrete_graph;

pub mod cli;
pub mod commands;

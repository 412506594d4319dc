//! # discrete
//!
//! Entry point: parse the command line, install logging, run one command and
//! print its output.
//!
//! Logs go to stderr so stdout carries only the command output. Set
//! `RUST_LOG=debug` (or `trace`) to follow the algorithms step by step.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use discrete::cli::Cli;
use discrete::commands::execute_command;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let output = execute_command(cli.command)?;
    println!("{output}");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

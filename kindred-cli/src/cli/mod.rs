//! Command-line interface orchestration for kindred.
//!
//! The `run` command reads a windowed document from a file or standard input
//! and ranks its spelling-variant groups.

mod commands;

pub use commands::{
    Cli, CliError, CliErrorCode, Command, ExecutionSummary, RunCommand, StrategyArg,
    render_summary, run_cli, run_with_reader,
};

#[cfg(test)]
mod test_helpers;

//! Command-line interface for replaying union-find query scripts.
//!
//! The `run` command builds a bounds-checked disjoint set of the requested
//! size, applies every query of a script in order and reports one answer per
//! query followed by the final group count.

mod commands;
mod script;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
pub use script::{Answer, Query};

//! Support library for the unionfind CLI binary.
//!
//! Re-exports the CLI and logging modules so doctests and unit tests can
//! replay query scripts without forking a subprocess.

pub mod cli;
pub mod logging;

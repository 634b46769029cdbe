//! Command implementations and argument parsing for the unionfind CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use unionfind_core::{CheckedDisjointSet, DisjointSetError, DisjointSetErrorCode};

use super::script::{Answer, Query};

/// Script path that selects standard input.
const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "unionfind", about = "Replay union-find query scripts.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Apply a query script to a fresh disjoint set.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of elements in the universe.
    #[arg(long, allow_negative_numbers = true)]
    pub len: i64,

    /// Query script, one query per line; `-` reads standard input.
    pub script: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or reading the script failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A script line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// A query referenced an invalid element.
    #[error("line {line}: {source}")]
    Query {
        /// One-based line number.
        line: usize,
        /// Error reported by the disjoint set.
        #[source]
        source: DisjointSetError,
    },
    /// The disjoint set could not be constructed.
    #[error(transparent)]
    Core(#[from] DisjointSetError),
}

impl CliError {
    /// Retrieve the stable core error code when the failure came from the
    /// disjoint set.
    #[must_use]
    pub const fn core_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::Query { source, .. } | Self::Core(source) => Some(source.code()),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Answers in query order.
    pub answers: Vec<Answer>,
    /// Number of groups after the last query.
    pub groups: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the script cannot be read or parsed, or when a
/// query is rejected by the disjoint set.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use unionfind_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "unite 0 1\nsize 1\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         len: 3,
///         script: file.path().to_path_buf(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.answers.len(), 2);
/// assert_eq!(summary.groups, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    run_command_with(command, || io::stdin().lock())
}

/// Executes `command`, reading the script from `stdin()` when its path is
/// [`STDIN_PATH`].
#[instrument(
    name = "cli.execute",
    err,
    skip(command, stdin),
    fields(len = command.len, script = field::Empty),
)]
pub(super) fn run_command_with<R: BufRead>(
    command: RunCommand,
    stdin: impl FnOnce() -> R,
) -> Result<ExecutionSummary, CliError> {
    let RunCommand { len, script } = command;
    Span::current().record("script", field::display(script.display()));
    let mut set = CheckedDisjointSet::try_with_len(len)?;

    let summary = if script.as_os_str() == STDIN_PATH {
        run_script(&mut set, stdin(), &script)?
    } else {
        run_script(&mut set, open_script(&script)?, &script)?
    };

    info!(
        queries = summary.answers.len(),
        groups = summary.groups,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_script", fields(path = field::Empty))]
pub(super) fn open_script(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Applies every query read from `reader` in order, stopping at the first
/// failure.
pub(super) fn run_script(
    set: &mut CheckedDisjointSet,
    reader: impl BufRead,
    path: &Path,
) -> Result<ExecutionSummary, CliError> {
    let mut answers = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let text = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let query = Query::parse(&text).map_err(|message| CliError::Parse {
            line: line_no,
            message,
        })?;
        let Some(query) = query else {
            continue;
        };
        let answer = query.apply(set).map_err(|source| CliError::Query {
            line: line_no,
            source,
        })?;
        answers.push(answer);
    }
    Ok(ExecutionSummary {
        answers,
        groups: set.group_count(),
    })
}

/// Renders `summary` to `writer`, one answer per line followed by the group
/// count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use unionfind_cli::cli::{Answer, ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     answers: vec![Answer::Flag(true), Answer::Size(2)],
///     groups: 4,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer.into_inner())?, "true\n2\ngroups: 4\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for answer in &summary.answers {
        writeln!(writer, "{answer}")?;
    }
    writeln!(writer, "groups: {}", summary.groups)?;
    Ok(())
}

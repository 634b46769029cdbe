//! Benchmark setup error type.

/// Errors that may occur while preparing a benchmark workload.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BenchSetupError {
    /// A workload needs at least one element to draw ids from.
    #[error("workload universe must contain at least one element")]
    EmptyUniverse,
    /// Doubling merges need a power-of-two universe.
    #[error("expected a power-of-two universe size for {context} (got {len})")]
    NotPowerOfTwo {
        /// The workload that rejected the size.
        context: &'static str,
        /// The rejected universe size.
        len: usize,
    },
}

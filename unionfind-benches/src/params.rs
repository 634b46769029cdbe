//! Benchmark parameter types.

use std::fmt;

/// Parameters for a random-pair `unite` benchmark run.
#[derive(Clone, Debug)]
pub struct UniteBenchParams {
    /// Number of elements in the universe.
    pub len: usize,
    /// Number of `unite` calls per iteration.
    pub pair_count: usize,
}

impl fmt::Display for UniteBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},pairs={}", self.len, self.pair_count)
    }
}

/// Parameters for a `find` benchmark run.
#[derive(Clone, Debug)]
pub struct FindBenchParams {
    /// Number of elements in the universe.
    pub len: usize,
}

impl fmt::Display for FindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.len)
    }
}

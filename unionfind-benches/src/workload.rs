//! Deterministic synthetic workloads for disjoint-set benchmarks.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use unionfind_core::DisjointSet;

use crate::error::BenchSetupError;

/// Configuration for a uniformly random stream of element pairs.
#[derive(Clone, Debug)]
pub struct PairStreamConfig {
    /// Number of elements in the universe.
    pub len: usize,
    /// Number of pairs to generate.
    pub pair_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A reproducible sequence of `(left, right)` element pairs.
#[derive(Clone, Debug)]
pub struct PairStream {
    len: usize,
    pairs: Vec<(usize, usize)>,
}

impl PairStream {
    /// Generates `config.pair_count` pairs drawn uniformly from
    /// `0..config.len`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::EmptyUniverse`] when `config.len` is zero.
    ///
    /// # Examples
    /// ```
    /// use unionfind_benches::workload::{PairStream, PairStreamConfig};
    ///
    /// let stream = PairStream::generate(&PairStreamConfig {
    ///     len: 10,
    ///     pair_count: 4,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(stream.pairs().len(), 4);
    /// # Ok::<(), unionfind_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &PairStreamConfig) -> Result<Self, BenchSetupError> {
        if config.len == 0 {
            return Err(BenchSetupError::EmptyUniverse);
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pairs = (0..config.pair_count)
            .map(|_| (rng.gen_range(0..config.len), rng.gen_range(0..config.len)))
            .collect();
        Ok(Self {
            len: config.len,
            pairs,
        })
    }

    /// Number of elements in the universe the pairs are drawn from.
    #[must_use]
    pub const fn universe_len(&self) -> usize {
        self.len
    }

    /// The generated pairs in order.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Applies every pair to a fresh set, returning it with the number of
    /// calls that merged two groups.
    #[must_use]
    pub fn replay(&self) -> (DisjointSet, usize) {
        let mut set = DisjointSet::new(self.len);
        let merges = self
            .pairs
            .iter()
            .filter(|&&(left, right)| set.unite(left, right))
            .count();
        (set, merges)
    }
}

/// Builds a single group over `0..len` by repeatedly merging equal-sized
/// neighbouring blocks, uniting roots directly so no path gets compressed.
///
/// With union by size this produces the tallest trees the structure admits,
/// of height `log2(len)`.
///
/// # Errors
/// Returns [`BenchSetupError::NotPowerOfTwo`] unless `len` is a power of two.
pub fn doubling_merge(len: usize) -> Result<DisjointSet, BenchSetupError> {
    if !len.is_power_of_two() {
        return Err(BenchSetupError::NotPowerOfTwo {
            context: "doubling_merge",
            len,
        });
    }
    let mut set = DisjointSet::new(len);
    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(width.saturating_mul(2)) {
            let left = set.find(start);
            let right = set.find(start.saturating_add(width));
            set.unite(left, right);
        }
        width = width.saturating_mul(2);
    }
    Ok(set)
}

//! Shared test utilities for `unionfind-core`.

use proptest::test_runner::Config as ProptestConfig;
use unionfind_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `UNIONFIND_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Quadratic reference partition used as an oracle in tests.
///
/// Each element carries an explicit group label; merging relabels every
/// member of one group, so the answers are obviously correct if slow.
#[derive(Clone, Debug)]
pub(crate) struct NaivePartition {
    labels: Vec<usize>,
}

impl NaivePartition {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    pub(crate) fn same(&self, left: usize, right: usize) -> bool {
        self.labels[left] == self.labels[right]
    }

    pub(crate) fn unite(&mut self, left: usize, right: usize) -> bool {
        let from = self.labels[right];
        let to = self.labels[left];
        if from == to {
            return false;
        }
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
        true
    }

    pub(crate) fn size(&self, node: usize) -> usize {
        let label = self.labels[node];
        self.labels.iter().filter(|&&other| other == label).count()
    }

    pub(crate) fn group_count(&self) -> usize {
        let mut seen = self.labels.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

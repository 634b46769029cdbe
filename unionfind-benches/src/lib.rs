//! Benchmark support crate for unionfind.
//!
//! Provides deterministic synthetic workloads and parameter types used by the
//! Criterion benchmarks of the disjoint-set operations.

pub mod error;
pub mod params;
pub mod workload;

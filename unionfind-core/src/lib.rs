//! Union-find core library.
//!
//! [`DisjointSet`] partitions the dense universe `0..n` into disjoint groups
//! using path compression and union by size. [`CheckedDisjointSet`] wraps it
//! for untrusted input, validating every element id before delegating and
//! reporting failures as [`DisjointSetError`] values with stable codes.

mod checked;
mod disjoint_set;
mod error;

#[cfg(test)]
mod test_utils;

pub use crate::{
    checked::CheckedDisjointSet,
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, Result},
};

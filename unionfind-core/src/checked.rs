//! Bounds-checked wrapper around [`DisjointSet`] for untrusted input.
//!
//! Ids arrive as signed integers so negative values coming from parsers or
//! foreign callers are representable and rejected rather than wrapped. Every
//! id is validated before the wrapped forest is touched, so a failed call
//! leaves the partition and its compressed paths exactly as they were.

use tracing::{debug, trace};

use crate::{
    disjoint_set::DisjointSet,
    error::{DisjointSetError, Result},
};

/// A [`DisjointSet`] whose operations validate element ids.
///
/// # Examples
/// ```
/// use unionfind_core::{CheckedDisjointSet, DisjointSetError};
///
/// let mut set = CheckedDisjointSet::try_with_len(3)?;
/// assert!(set.unite(0, 2)?);
/// assert_eq!(set.size(2)?, 2);
/// assert_eq!(
///     set.find(3),
///     Err(DisjointSetError::IndexOutOfRange { index: 3, len: 3 }),
/// );
/// # Ok::<(), DisjointSetError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedDisjointSet {
    inner: DisjointSet,
}

impl CheckedDisjointSet {
    /// Creates `len` singleton groups.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            inner: DisjointSet::new(len),
        }
    }

    /// Creates `len` singleton groups from a signed length.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NegativeLength`] when `len` is negative and
    /// [`DisjointSetError::LengthTooLarge`] when the forest cannot be
    /// allocated.
    pub fn try_with_len(len: i64) -> Result<Self> {
        let checked = usize::try_from(len).map_err(|_| {
            debug!(len, "rejected universe size");
            DisjointSetError::NegativeLength { len }
        })?;
        let inner = DisjointSet::try_new(checked).inspect_err(|_| {
            debug!(len, "universe size exceeds available memory");
        })?;
        Ok(Self { inner })
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when the universe contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of disjoint groups currently in the partition.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.inner.group_count()
    }

    /// Borrows the unchecked forest.
    #[must_use]
    pub fn as_inner(&self) -> &DisjointSet {
        &self.inner
    }

    /// Consumes the wrapper and returns the unchecked forest.
    #[must_use]
    pub fn into_inner(self) -> DisjointSet {
        self.inner
    }

    /// Converts `index` into an element id of this universe.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `index` is negative
    /// or not below [`Self::len`].
    pub fn element(&self, index: i64) -> Result<usize> {
        let len = self.len();
        match usize::try_from(index) {
            Ok(node) if node < len => Ok(node),
            _ => {
                debug!(index, len, "rejected element id");
                Err(DisjointSetError::IndexOutOfRange { index, len })
            }
        }
    }

    /// Returns the representative of the group containing `index`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] for an invalid id.
    pub fn find(&mut self, index: i64) -> Result<usize> {
        let node = self.element(index)?;
        Ok(self.inner.find(node))
    }

    /// Returns `true` when both ids belong to the same group.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] if either id is invalid.
    pub fn same(&mut self, left: i64, right: i64) -> Result<bool> {
        let (left, right) = self.pair(left, right)?;
        Ok(self.inner.same(left, right))
    }

    /// Merges the groups containing both ids, returning whether the
    /// partition changed.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] if either id is invalid.
    pub fn unite(&mut self, left: i64, right: i64) -> Result<bool> {
        let (left, right) = self.pair(left, right)?;
        let merged = self.inner.unite(left, right);
        if merged {
            trace!(left, right, groups = self.inner.group_count(), "merged groups");
        }
        Ok(merged)
    }

    /// Returns the size of the group containing `index`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] for an invalid id.
    pub fn size(&mut self, index: i64) -> Result<usize> {
        let node = self.element(index)?;
        Ok(self.inner.size(node))
    }

    fn pair(&self, left: i64, right: i64) -> Result<(usize, usize)> {
        Ok((self.element(left)?, self.element(right)?))
    }
}

impl From<DisjointSet> for CheckedDisjointSet {
    fn from(inner: DisjointSet) -> Self {
        Self { inner }
    }
}

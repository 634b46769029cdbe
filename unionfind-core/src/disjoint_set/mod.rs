//! Union-find (disjoint set union) over the dense universe `0..n`.
//!
//! The forest is stored as two index arrays rather than linked nodes: every
//! link is an element id into `parent`, so path compression only rewrites
//! integers in place. Roots carry the [`ROOT`] sentinel in `parent` and hold
//! the size of their group in `group_size`; the size entry of a non-root is
//! stale and is never read.

use crate::error::{DisjointSetError, Result};

/// Sentinel stored in `parent` for elements that are the root of their tree.
const ROOT: usize = usize::MAX;

/// Partition of `0..n` into disjoint groups supporting merge and membership
/// queries in near-constant amortised time.
///
/// Lookups compress paths as a side effect, so every query takes `&mut self`
/// even though the partition it reports is unchanged. Callers that need to
/// share an instance across threads must serialise access externally.
///
/// Element ids are not validated beyond slice indexing. Use
/// [`crate::CheckedDisjointSet`] when ids come from untrusted input.
///
/// # Examples
/// ```
/// use unionfind_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.unite(0, 1));
/// assert!(!set.unite(1, 0));
/// assert!(set.same(0, 1));
/// assert_eq!(set.size(1), 2);
/// assert_eq!(set.group_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    group_size: Vec<usize>,
    groups: usize,
}

impl DisjointSet {
    /// Creates `len` singleton groups, one per element id in `0..len`.
    ///
    /// An empty universe is valid; no element operation can be called on it.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![ROOT; len],
            group_size: vec![1; len],
            groups: len,
        }
    }

    /// Creates `len` singleton groups, reporting allocation failure instead
    /// of aborting.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::LengthTooLarge`] when either array of
    /// `len` entries cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use unionfind_core::{DisjointSet, DisjointSetError};
    ///
    /// assert_eq!(DisjointSet::try_new(3), Ok(DisjointSet::new(3)));
    /// assert_eq!(
    ///     DisjointSet::try_new(usize::MAX),
    ///     Err(DisjointSetError::LengthTooLarge { len: usize::MAX }),
    /// );
    /// ```
    pub fn try_new(len: usize) -> Result<Self> {
        let mut parent = Vec::new();
        let mut group_size = Vec::new();
        parent
            .try_reserve_exact(len)
            .and_then(|()| group_size.try_reserve_exact(len))
            .map_err(|_| DisjointSetError::LengthTooLarge { len })?;
        parent.resize(len, ROOT);
        group_size.resize(len, 1);
        Ok(Self {
            parent,
            group_size,
            groups: len,
        })
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the universe contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint groups currently in the partition.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Returns the representative of the group containing `node`.
    ///
    /// Every element visited on the way up is relinked directly to the root,
    /// so a repeated lookup on the same path costs a single step. The result
    /// is stable until a later [`Self::unite`] merges the group.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != ROOT {
            root = self.parent[root];
        }

        while self.parent[node] != ROOT {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Returns `true` when `left` and `right` belong to the same group.
    ///
    /// # Panics
    /// Panics if either id is `>= self.len()`.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the groups containing `left` and `right`.
    ///
    /// Returns `false` without modifying the structure when both ids already
    /// share a group, which makes the call usable as a cycle check when
    /// adding graph edges. Otherwise the root of the smaller group is attached
    /// under the root of the larger one and `true` is returned. When both
    /// groups have the same size the resulting representative is
    /// unspecified.
    ///
    /// # Panics
    /// Panics if either id is `>= self.len()`.
    pub fn unite(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        if self.group_size[left] < self.group_size[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        self.group_size[left] += self.group_size[right];
        self.groups -= 1;
        true
    }

    /// Returns the number of elements in the group containing `node`.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    pub fn size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.group_size[root]
    }

    /// Direct parent of `node`, or `None` for a root.
    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> Option<usize> {
        match self.parent[node] {
            ROOT => None,
            parent => Some(parent),
        }
    }
}


#[cfg(test)]
mod property;

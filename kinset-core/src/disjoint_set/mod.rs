//! Union-find (disjoint set union) over a fixed universe of `0..len` elements.
//!
//! `find` compresses paths iteratively in two passes and `union` links roots
//! by rank, giving near-constant amortized cost per operation without
//! recursion. Every public entry point validates its indices before touching
//! the internal arrays, so a rejected call never leaves a partial update
//! behind.

use crate::{
    error::DisjointSetError,
    labels::{ComponentId, ComponentLabels},
};


/// A partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use kinset_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(set.union(2, 3)?);
/// assert!(!set.union(1, 0)?);
/// assert_eq!(set.component_count(), 2);
/// assert!(set.same_set(0, 1)?);
/// assert!(!set.same_set(1, 2)?);
/// # Ok::<(), kinset_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each its own root with rank zero.
    ///
    /// # Examples
    /// ```
    /// use kinset_core::DisjointSet;
    ///
    /// let set = DisjointSet::new(5);
    /// assert_eq!(set.len(), 5);
    /// assert_eq!(set.component_count(), 5);
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the universe has no elements.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets, i.e. the number of elements that
    /// are their own parent.
    ///
    /// Path compression only rewires non-root links, so the count is exact
    /// regardless of how many `find` calls have run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is relinked directly to the
    /// root, so subsequent lookups along that path take a single step.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `node >= len`.
    ///
    /// # Examples
    /// ```
    /// use kinset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(3);
    /// set.union(0, 1)?;
    /// set.union(1, 2)?;
    /// let root = set.find(0)?;
    /// assert_eq!(set.parent(0)?, root);
    /// assert!(set.find(3).is_err());
    /// # Ok::<(), kinset_core::DisjointSetError>(())
    /// ```
    pub fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// both elements already shared a representative. The lower-rank root is
    /// attached beneath the higher-rank root; on equal ranks `left`'s root is
    /// attached beneath `right`'s root and `right`'s rank grows by one.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when either index is
    /// `>= len`. Both indices are checked before any path is compressed.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.merge(left, right))
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when either index is
    /// `>= len`.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    /// Returns the immediate parent of `node` without compressing anything.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `node >= len`.
    pub fn parent(&self, node: usize) -> Result<usize, DisjointSetError> {
        self.parent
            .get(node)
            .copied()
            .ok_or_else(|| self.out_of_range(node))
    }

    /// Returns the rank recorded for `node`. Only meaningful for roots.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `node >= len`.
    pub fn rank(&self, node: usize) -> Result<u8, DisjointSetError> {
        self.rank
            .get(node)
            .copied()
            .ok_or_else(|| self.out_of_range(node))
    }

    /// Returns `true` when `node` is the representative of its set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `node >= len`.
    pub fn is_root(&self, node: usize) -> Result<bool, DisjointSetError> {
        self.parent(node).map(|parent| parent == node)
    }

    /// Iterates over the current roots in ascending index order.
    ///
    /// # Examples
    /// ```
    /// use kinset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(3);
    /// set.union(0, 2)?;
    /// assert_eq!(set.roots().collect::<Vec<_>>(), vec![1, 2]);
    /// # Ok::<(), kinset_core::DisjointSetError>(())
    /// ```
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .map(|(node, _)| node)
    }

    /// Labels every element with a contiguous component id.
    ///
    /// Ids are handed out in order of each component's lowest element, so the
    /// labelling depends only on the partition and not on the tree shapes.
    ///
    /// # Examples
    /// ```
    /// use kinset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(4);
    /// set.union(3, 1)?;
    /// let labels = set.component_labels();
    /// let ids: Vec<usize> = labels.labels().iter().map(|id| id.get()).collect();
    /// assert_eq!(ids, vec![0, 1, 2, 1]);
    /// # Ok::<(), kinset_core::DisjointSetError>(())
    /// ```
    #[must_use]
    pub fn component_labels(&mut self) -> ComponentLabels {
        let mut by_root: Vec<Option<ComponentId>> = vec![None; self.len()];
        let mut labels = Vec::with_capacity(self.len());
        let mut next = 0;
        for node in 0..self.len() {
            let root = self.find_root(node);
            let id = match by_root.get_mut(root) {
                Some(Some(id)) => *id,
                Some(slot) => {
                    let id = ComponentId::new(next);
                    next += 1;
                    *slot = Some(id);
                    id
                }
                None => continue,
            };
            labels.push(id);
        }
        ComponentLabels::from_dense_labels(labels, next)
    }

    /// Merges two already-validated elements.
    pub(crate) fn merge(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }
        self.link_roots(left_root, right_root);
        self.components -= 1;
        true
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "callers validate `node` and every stored parent is a valid index"
    )]
    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "both roots were produced by `find_root` on validated indices"
    )]
    fn link_roots(&mut self, left_root: usize, right_root: usize) {
        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank > right_rank {
            self.parent[right_root] = left_root;
        } else {
            self.parent[left_root] = right_root;
            if left_rank == right_rank {
                self.rank[right_root] = right_rank.saturating_add(1);
            }
        }
    }

    const fn check(&self, node: usize) -> Result<(), DisjointSetError> {
        if node < self.len() {
            Ok(())
        } else {
            Err(self.out_of_range(node))
        }
    }

    const fn out_of_range(&self, index: usize) -> DisjointSetError {
        DisjointSetError::IndexOutOfRange {
            index,
            len: self.parent.len(),
        }
    }
}

//! Component labelling results.
//!
//! [`ComponentLabels`] records which component every node landed in after a
//! sequence of unions. Ids are dense, start at zero, and are allocated in
//! order of each component's lowest node so equal partitions always produce
//! equal labellings.

/// Per-node component assignments.
///
/// # Examples
/// ```
/// use kinset_core::{DisjointSet, ComponentId};
///
/// let mut set = DisjointSet::new(5);
/// set.union(0, 4)?;
/// set.union(1, 2)?;
/// let labels = set.component_labels();
/// assert_eq!(labels.component_count(), 3);
/// assert_eq!(labels.sizes(), vec![2, 2, 1]);
/// assert_eq!(labels.members(ComponentId::new(0)), vec![0, 4]);
/// # Ok::<(), kinset_core::DisjointSetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: Vec<ComponentId>,
    component_count: usize,
}

impl ComponentLabels {
    /// Wraps labels already known to be dense and ordered by first
    /// appearance.
    pub(crate) const fn from_dense_labels(labels: Vec<ComponentId>, component_count: usize) -> Self {
        Self {
            labels,
            component_count,
        }
    }

    /// Returns the component of every node, indexed by node id.
    #[must_use]
    pub fn labels(&self) -> &[ComponentId] {
        &self.labels
    }

    /// Returns the number of distinct components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the component containing `node`, if `node` is in range.
    #[must_use]
    pub fn component_of(&self, node: usize) -> Option<ComponentId> {
        self.labels.get(node).copied()
    }

    /// Returns the number of nodes in each component, indexed by component id.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.component_count];
        for id in &self.labels {
            if let Some(size) = sizes.get_mut(id.get()) {
                *size += 1;
            }
        }
        sizes
    }

    /// Returns the nodes of component `id` in ascending order. Unknown ids
    /// yield an empty list.
    #[must_use]
    pub fn members(&self, id: ComponentId) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, label)| *label == id)
            .map(|(node, _)| node)
            .collect()
    }
}

/// Identifier assigned to a connected component.
///
/// # Examples
/// ```
/// use kinset_core::ComponentId;
///
/// let id = ComponentId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Creates a component identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

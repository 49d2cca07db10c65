//! Vertex identifiers and the registry that densifies them.
//!
//! Input graphs name vertices with sparse external ids. Searches work on
//! dense zero-based indices, so every id is assigned the next free index the
//! first time it is seen. The registry keeps the assignment order for the
//! mapping table written alongside the neighbour rows.

use std::{collections::HashMap, fmt};

/// External vertex identifier supplied by the input graph.
///
/// # Examples
/// ```
/// use pathknn_core::VertexId;
///
/// let id = VertexId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw external identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Assigns dense indices to external vertex ids in first-seen order.
///
/// Indices are never reassigned, so once every id has been registered the
/// mapping is a bijection onto `0..len()`. Registration takes `&mut self`;
/// the build phase that drives it is single-threaded.
///
/// # Examples
/// ```
/// use pathknn_core::{VertexId, VertexRegistry};
///
/// let mut registry = VertexRegistry::new();
/// assert_eq!(registry.normalize(VertexId::new(40)), 0);
/// assert_eq!(registry.normalize(VertexId::new(10)), 1);
/// assert_eq!(registry.normalize(VertexId::new(40)), 0);
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.id_of(1), Some(VertexId::new(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexRegistry {
    indices: HashMap<VertexId, usize>,
    ids: Vec<VertexId>,
}

impl VertexRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dense index for `id`, assigning the next free index when
    /// the id has not been seen before.
    pub fn normalize(&mut self, id: VertexId) -> usize {
        if let Some(&index) = self.indices.get(&id) {
            return index;
        }
        let index = self.ids.len();
        self.indices.insert(id, index);
        self.ids.push(id);
        index
    }

    /// Returns the index previously assigned to `id`.
    #[must_use]
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.indices.get(&id).copied()
    }

    /// Returns the external id registered at `index`.
    #[must_use]
    pub fn id_of(&self, index: usize) -> Option<VertexId> {
        self.ids.get(index).copied()
    }

    /// Number of distinct ids registered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether no ids have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates `(external id, index)` pairs in assignment order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (VertexId, usize)> + '_ {
        self.ids.iter().enumerate().map(|(index, &id)| (id, index))
    }
}

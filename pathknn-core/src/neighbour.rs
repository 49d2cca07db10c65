//! Neighbour records and the rows they form.

use std::cmp::Ordering;

/// Neighbour discovered during a search, with its path distance from the
/// source.
///
/// Ordering compares `distance` with [`f64::total_cmp`] and breaks ties on
/// the lower `id`, which is the extraction order of the search frontier.
/// Placeholder records carry [`f64::INFINITY`].
///
/// # Examples
/// ```
/// use pathknn_core::Neighbour;
///
/// let near = Neighbour { id: 7, distance: 1.5 };
/// let tie = Neighbour { id: 2, distance: 1.5 };
/// assert!(tie < near);
/// assert!(!near.is_placeholder());
/// assert!(Neighbour::placeholder(3).is_placeholder());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// Dense index of the neighbouring vertex.
    pub id: usize,
    /// Shortest-path distance from the source vertex.
    pub distance: f64,
}

impl Neighbour {
    /// Creates an infinite-distance record used to pad short rows.
    #[must_use]
    pub const fn placeholder(id: usize) -> Self {
        Self {
            id,
            distance: f64::INFINITY,
        }
    }

    /// Returns whether the record was synthesised by padding.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.distance == f64::INFINITY
    }
}

impl Eq for Neighbour {}

impl Ord for Neighbour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for Neighbour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered neighbour list for one source vertex.
///
/// Real neighbours come first in discovery order, followed by placeholders
/// in ascending index order.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighbourRow {
    source: usize,
    neighbours: Vec<Neighbour>,
}

impl NeighbourRow {
    /// Creates a row for `source` from already ordered records.
    #[must_use]
    pub fn new(source: usize, neighbours: Vec<Neighbour>) -> Self {
        Self { source, neighbours }
    }

    /// Dense index of the row's source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// All records, real and placeholder.
    #[must_use]
    pub fn neighbours(&self) -> &[Neighbour] {
        &self.neighbours
    }

    /// Number of records found by the search itself.
    #[must_use]
    pub fn real_count(&self) -> usize {
        self.neighbours
            .iter()
            .take_while(|neighbour| !neighbour.is_placeholder())
            .count()
    }

    /// Number of records in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns whether the row holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    pub(crate) fn push(&mut self, neighbour: Neighbour) {
        self.neighbours.push(neighbour);
    }
}

/// Rows for every vertex of a graph, indexed by source vertex.
///
/// # Examples
/// ```
/// use pathknn_core::{Neighbour, NeighbourRow, NeighbourTable};
///
/// let table = NeighbourTable::from_rows(vec![
///     NeighbourRow::new(0, vec![Neighbour { id: 1, distance: 2.0 }]),
///     NeighbourRow::new(1, vec![Neighbour { id: 0, distance: 2.0 }]),
/// ]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.row(1).map(|row| row.source()), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighbourTable {
    rows: Vec<NeighbourRow>,
}

impl NeighbourTable {
    /// Wraps rows ordered by ascending source index.
    #[must_use]
    pub fn from_rows(rows: Vec<NeighbourRow>) -> Self {
        Self { rows }
    }

    /// Rows in ascending source order.
    #[must_use]
    pub fn rows(&self) -> &[NeighbourRow] {
        &self.rows
    }

    /// Row for `source`, if present.
    #[must_use]
    pub fn row(&self, source: usize) -> Option<&NeighbourRow> {
        self.rows.get(source)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for NeighbourTable {
    type Item = NeighbourRow;
    type IntoIter = std::vec::IntoIter<NeighbourRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

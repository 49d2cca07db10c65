//! Undirected weighted graph over dense vertex indices.
//!
//! The graph is assembled in a single pass over [`AdjacencyRow`]s: external
//! ids are densified through a [`VertexRegistry`], raw weights are converted
//! with [`weight_to_distance`], and every edge is stored once in each
//! endpoint's adjacency list. After [`GraphBuilder::finish`] the graph is
//! read-only and may be shared freely between search workers.

use tracing::{info, instrument};

use crate::{
    error::GraphError,
    vertex::{VertexId, VertexRegistry},
    weight::weight_to_distance,
};

/// One parsed input row: a source vertex and its weighted destinations.
///
/// # Examples
/// ```
/// use pathknn_core::{AdjacencyRow, VertexId};
///
/// let row = AdjacencyRow::new(VertexId::new(10), vec![(VertexId::new(20), 9)]);
/// assert_eq!(row.source(), VertexId::new(10));
/// assert_eq!(row.edges().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyRow {
    source: VertexId,
    edges: Vec<(VertexId, i64)>,
}

impl AdjacencyRow {
    /// Creates a row from a source id and `(destination, raw weight)` pairs.
    #[must_use]
    pub fn new(source: VertexId, edges: Vec<(VertexId, i64)>) -> Self {
        Self { source, edges }
    }

    /// Creates a row that declares `source` without any edges.
    #[must_use]
    pub fn isolated(source: VertexId) -> Self {
        Self::new(source, Vec::new())
    }

    /// External id of the row's source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Destination ids paired with raw closeness weights.
    #[must_use]
    pub fn edges(&self) -> &[(VertexId, i64)] {
        &self.edges
    }
}

/// Adjacency entry pointing at `target` with a transformed distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Dense index of the neighbouring vertex.
    pub target: usize,
    /// Positive distance derived from the raw weight.
    pub distance: f64,
}

/// Immutable adjacency-list graph.
///
/// # Examples
/// ```
/// use pathknn_core::{AdjacencyRow, Graph, VertexId};
///
/// let graph = Graph::build([
///     AdjacencyRow::new(VertexId::new(10), vec![(VertexId::new(20), 9)]),
///     AdjacencyRow::isolated(VertexId::new(30)),
/// ])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.neighbours(1)[0].target, 0);
/// assert!(graph.neighbours(2).is_empty());
/// # Ok::<(), pathknn_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    registry: VertexRegistry,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph from `rows` in one pass.
    ///
    /// # Errors
    /// Returns [`GraphError::NonPositiveWeight`] for the first edge whose raw
    /// weight is zero or negative.
    #[instrument(name = "core.build_graph", err, skip(rows))]
    pub fn build<I>(rows: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = AdjacencyRow>,
    {
        let mut builder = GraphBuilder::new();
        for row in rows {
            builder.push_row(&row)?;
        }
        let graph = builder.finish();
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges read from the input.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges incident to `vertex`; empty when the index is out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Mapping between external ids and dense indices.
    #[must_use]
    pub fn registry(&self) -> &VertexRegistry {
        &self.registry
    }
}

/// Incremental form of [`Graph::build`].
///
/// # Examples
/// ```
/// use pathknn_core::{AdjacencyRow, GraphBuilder, VertexId};
///
/// let mut builder = GraphBuilder::new();
/// builder.push_row(&AdjacencyRow::new(VertexId::new(1), vec![(VertexId::new(2), 3)]))?;
/// builder.push_row(&AdjacencyRow::new(VertexId::new(2), vec![(VertexId::new(3), 3)]))?;
/// let graph = builder.finish();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.neighbours(1).len(), 2);
/// # Ok::<(), pathknn_core::GraphError>(())
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: Vec<Vec<Edge>>,
    registry: VertexRegistry,
    edge_count: usize,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row, registering its source even when it has no edges.
    ///
    /// Edges of a row are validated before any of them is stored, so a
    /// rejected row leaves no partial adjacency behind.
    ///
    /// # Errors
    /// Returns [`GraphError::NonPositiveWeight`] when a raw weight is zero or
    /// negative.
    pub fn push_row(&mut self, row: &AdjacencyRow) -> Result<(), GraphError> {
        let distances = row
            .edges()
            .iter()
            .map(|&(target, weight)| {
                weight_to_distance(weight).ok_or(GraphError::NonPositiveWeight {
                    source_id: row.source(),
                    target_id: target,
                    weight,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let source = self.vertex(row.source());
        for (&(target_id, _), distance) in row.edges().iter().zip(distances) {
            let target = self.vertex(target_id);
            self.connect(source, target, distance);
        }
        Ok(())
    }

    /// Freezes the builder into a read-only [`Graph`].
    #[must_use]
    pub fn finish(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
            registry: self.registry,
            edge_count: self.edge_count,
        }
    }

    fn vertex(&mut self, id: VertexId) -> usize {
        let index = self.registry.normalize(id);
        if index == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        index
    }

    fn connect(&mut self, left: usize, right: usize, distance: f64) {
        if let Some(list) = self.adjacency.get_mut(left) {
            list.push(Edge {
                target: right,
                distance,
            });
        }
        if let Some(list) = self.adjacency.get_mut(right) {
            list.push(Edge {
                target: left,
                distance,
            });
        }
        self.edge_count += 1;
    }
}

//! Truncated single-source shortest-path search.
//!
//! A search from `source` runs Dijkstra's algorithm but stops after `k + 1`
//! extractions (the source plus `k` neighbours). Because all edge distances
//! are positive, vertices leave the frontier in non-decreasing distance
//! order, so the first `k` extractions after the source are exactly the `k`
//! nearest vertices by shortest-path distance.
//!
//! Each worker owns a [`SearchScratch`]. The scratch keeps per-vertex
//! tentative distances and a generation stamp marking the vertices touched
//! by the current search; starting a new search bumps the generation instead
//! of clearing the buffers. The frontier is a binary heap with lazy
//! deletion: an improved vertex is pushed again and the stale entry is
//! skipped when it surfaces.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::Graph,
    neighbour::{Neighbour, NeighbourRow},
    padding::pad_row,
};

#[cfg(test)]
mod property;

/// Private working state for one search at a time.
///
/// # Examples
/// ```
/// use pathknn_core::{AdjacencyRow, Graph, SearchScratch, VertexId};
///
/// let graph = Graph::build([
///     AdjacencyRow::new(VertexId::new(10), vec![(VertexId::new(20), 9)]),
///     AdjacencyRow::new(VertexId::new(20), vec![(VertexId::new(30), 9)]),
/// ])?;
/// let mut scratch = SearchScratch::new(graph.vertex_count());
/// let row = scratch.search(&graph, 0, 2);
/// let ids: Vec<usize> = row.neighbours().iter().map(|n| n.id).collect();
/// assert_eq!(ids, vec![1, 2]);
/// # Ok::<(), pathknn_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchScratch {
    distances: Vec<f64>,
    stamps: Vec<u32>,
    generation: u32,
    frontier: BinaryHeap<Reverse<Neighbour>>,
}

impl SearchScratch {
    /// Allocates scratch buffers for a graph with `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            distances: vec![f64::INFINITY; vertex_count],
            stamps: vec![0; vertex_count],
            generation: 0,
            frontier: BinaryHeap::new(),
        }
    }

    /// Finds the `k` nearest vertices to `source` and pads the row to `k`
    /// records when the source's component is too small.
    ///
    /// Sources outside the graph yield an empty row.
    #[must_use]
    pub fn search(&mut self, graph: &Graph, source: usize, k: usize) -> NeighbourRow {
        let mut row = self.expand(graph, source, k);
        if row.len() < k && source < graph.vertex_count() {
            pad_row(&mut row, k, graph.vertex_count(), |vertex| {
                self.is_touched(vertex)
            });
        }
        row
    }

    /// Returns whether the most recent search assigned `vertex` a distance.
    #[must_use]
    pub fn is_touched(&self, vertex: usize) -> bool {
        self.generation != 0 && self.stamps.get(vertex) == Some(&self.generation)
    }

    /// Runs the truncated Dijkstra expansion without padding.
    #[expect(
        clippy::float_arithmetic,
        reason = "path distances accumulate edge distances"
    )]
    pub(crate) fn expand(&mut self, graph: &Graph, source: usize, k: usize) -> NeighbourRow {
        let mut row = NeighbourRow::new(source, Vec::with_capacity(k));
        if source >= graph.vertex_count() {
            return row;
        }
        self.begin(graph.vertex_count());
        self.touch(source);
        self.distances[source] = 0.0;
        self.frontier.push(Reverse(Neighbour {
            id: source,
            distance: 0.0,
        }));

        let limit = k.saturating_add(1);
        let mut extracted = 0_usize;
        while let Some(Reverse(current)) = self.frontier.pop() {
            if current.distance > self.distances[current.id] {
                continue;
            }
            extracted += 1;
            if extracted > 1 {
                row.push(current);
            }
            if extracted == limit {
                break;
            }
            for edge in graph.neighbours(current.id) {
                let tentative = self.touch(edge.target);
                let candidate = current.distance + edge.distance;
                if candidate < tentative {
                    self.distances[edge.target] = candidate;
                    self.frontier.push(Reverse(Neighbour {
                        id: edge.target,
                        distance: candidate,
                    }));
                }
            }
        }
        row
    }

    fn begin(&mut self, vertex_count: usize) {
        if self.stamps.len() < vertex_count {
            self.stamps.resize(vertex_count, 0);
            self.distances.resize(vertex_count, f64::INFINITY);
        }
        self.frontier.clear();
        if self.generation == u32::MAX {
            self.stamps.fill(0);
            self.generation = 0;
        }
        self.generation += 1;
    }

    /// Marks `vertex` as touched, resetting its distance on first contact in
    /// the current generation, and returns its tentative distance.
    fn touch(&mut self, vertex: usize) -> f64 {
        if self.stamps[vertex] != self.generation {
            self.stamps[vertex] = self.generation;
            self.distances[vertex] = f64::INFINITY;
        }
        self.distances[vertex]
    }

    #[cfg(test)]
    pub(crate) fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

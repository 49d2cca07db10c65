//! Fixture types shared by the search property suites.

use crate::{
    graph::{AdjacencyRow, Graph},
    vertex::VertexId,
};

/// Randomised graph whose external ids equal their dense indices.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices; ids are `0..vertex_count`.
    pub vertex_count: usize,
    /// Undirected edges as `(left, right, raw weight)`.
    pub edges: Vec<(usize, usize, i64)>,
    /// Requested neighbour count.
    pub k: usize,
}

impl GraphFixture {
    /// Builds the graph, declaring every vertex up front so indices match ids.
    pub(super) fn build(&self) -> Graph {
        let declared = (0..self.vertex_count).map(|vertex| AdjacencyRow::isolated(id(vertex)));
        let edges = self.edges.iter().map(|&(left, right, weight)| {
            AdjacencyRow::new(id(left), vec![(id(right), weight)])
        });
        match Graph::build(declared.chain(edges)) {
            Ok(graph) => graph,
            Err(err) => panic!("fixture graph must build: {err}"),
        }
    }
}

fn id(vertex: usize) -> VertexId {
    VertexId::new(vertex as u64)
}

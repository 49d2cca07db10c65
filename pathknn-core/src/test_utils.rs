//! Shared test utilities for `pathknn-core`.

use pathknn_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{
    graph::{AdjacencyRow, Graph},
    vertex::VertexId,
};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with one row per edge, followed by rows declaring
/// `isolated` vertices.
///
/// # Examples
/// ```ignore
/// let graph = graph_from_edges(&[(10, 20, 9)], &[40]);
/// assert_eq!(graph.vertex_count(), 3);
/// ```
pub(crate) fn graph_from_edges(edges: &[(u64, u64, i64)], isolated: &[u64]) -> Graph {
    let rows = edges
        .iter()
        .map(|&(source, target, weight)| {
            AdjacencyRow::new(
                VertexId::new(source),
                vec![(VertexId::new(target), weight)],
            )
        })
        .chain(
            isolated
                .iter()
                .map(|&vertex| AdjacencyRow::isolated(VertexId::new(vertex))),
        );
    match Graph::build(rows) {
        Ok(graph) => graph,
        Err(err) => panic!("test graph must build: {err}"),
    }
}

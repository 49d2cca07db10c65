//! Strategy builders for search property tests.
//!
//! Graphs stay small so the cubic oracle remains cheap. Weights are drawn
//! either from a narrow range, which produces many equal distances and
//! exercises tie-breaking, or from a wide range with mostly unique values.

use proptest::prelude::*;

use super::types::GraphFixture;

/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 14;
/// Maximum number of edges per generated graph.
const MAX_EDGES: usize = 40;

/// Generates fixtures with possibly disconnected topologies and a
/// neighbour count that may exceed the vertex count.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (1..=MAX_VERTICES, prop_oneof![Just(1_i64..=3), Just(1_i64..=10_000)])
        .prop_flat_map(|(vertex_count, weights)| {
            let edge = (0..vertex_count, 0..vertex_count, weights);
            (
                Just(vertex_count),
                proptest::collection::vec(edge, 0..=MAX_EDGES),
                1..=vertex_count + 2,
            )
        })
        .prop_map(|(vertex_count, edges, k)| GraphFixture {
            vertex_count,
            edges,
            k,
        })
}

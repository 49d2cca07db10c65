//! Property-based tests for the truncated search.
//!
//! Verifies rows against an all-pairs oracle on random small graphs:
//! real records are the true nearest vertices, rows have fixed width, and
//! placeholders never collide with real records.

mod oracle;
mod strategies;
mod types;

use proptest::{
    prop_assert, prop_assert_eq, proptest,
    test_runner::{TestCaseError, TestCaseResult},
};
use rstest::rstest;

use crate::{search::SearchScratch, test_utils::suite_proptest_config};

use self::{oracle::floyd_warshall, strategies::graph_fixture_strategy, types::GraphFixture};

/// Relative tolerance between search and oracle distances, which may sum
/// the same path in a different order.
const TOLERANCE: f64 = 1e-9;

#[expect(
    clippy::float_arithmetic,
    reason = "relative tolerance comparison"
)]
fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= TOLERANCE * left.abs().max(right.abs()).max(1.0)
}

fn run_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let oracle = floyd_warshall(fixture);
    let mut scratch = SearchScratch::new(graph.vertex_count());

    for source in 0..graph.vertex_count() {
        let row = scratch.search(&graph, source, fixture.k);
        let ranked = oracle.ranked_from(source);
        let expected_real = fixture.k.min(ranked.len());
        prop_assert_eq!(row.real_count(), expected_real, "source {}", source);

        for (record, (_, oracle_distance)) in row.neighbours().iter().zip(&ranked) {
            if !close(record.distance, *oracle_distance) {
                return Err(TestCaseError::fail(format!(
                    "source {source}: record {record:?} distance differs from oracle rank {oracle_distance}"
                )));
            }
            let pair_distance = oracle.get(source, record.id);
            if !close(record.distance, pair_distance) {
                return Err(TestCaseError::fail(format!(
                    "source {source}: record {record:?} is not the shortest path ({pair_distance})"
                )));
            }
        }
    }
    Ok(())
}

fn run_padding_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let oracle = floyd_warshall(fixture);
    let mut scratch = SearchScratch::new(graph.vertex_count());
    let n = graph.vertex_count();

    for source in 0..n {
        let row = scratch.search(&graph, source, fixture.k);
        prop_assert_eq!(row.len(), fixture.k.min(n - 1), "source {}", source);

        let mut seen = vec![false; n];
        for record in row.neighbours() {
            prop_assert!(record.id != source, "source {} listed itself", source);
            prop_assert!(!seen[record.id], "duplicate id {} for {}", record.id, source);
            seen[record.id] = true;
        }

        let placeholders: Vec<usize> = row
            .neighbours()
            .iter()
            .skip(row.real_count())
            .map(|record| record.id)
            .collect();
        prop_assert!(
            row.neighbours()
                .iter()
                .skip(row.real_count())
                .all(|record| record.is_placeholder())
        );
        let unreachable: Vec<usize> = (0..n)
            .filter(|&vertex| !oracle.get(source, vertex).is_finite())
            .take(placeholders.len())
            .collect();
        prop_assert_eq!(placeholders, unreachable, "source {}", source);
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn rows_match_all_pairs_oracle(fixture in graph_fixture_strategy()) {
        run_oracle_property(&fixture)?;
    }

    #[test]
    fn rows_have_fixed_width_without_collisions(fixture in graph_fixture_strategy()) {
        run_padding_property(&fixture)?;
    }
}

#[rstest]
#[case::single_vertex(GraphFixture { vertex_count: 1, edges: vec![], k: 3 })]
#[case::self_loop(GraphFixture { vertex_count: 2, edges: vec![(0, 0, 4)], k: 1 })]
#[case::parallel_edges(GraphFixture {
    vertex_count: 3,
    edges: vec![(0, 1, 1), (0, 1, 50), (1, 2, 7)],
    k: 2,
})]
#[case::two_components(GraphFixture {
    vertex_count: 6,
    edges: vec![(0, 1, 2), (1, 2, 2), (3, 4, 9)],
    k: 4,
})]
fn targeted_fixtures_satisfy_properties(#[case] fixture: GraphFixture) {
    if let Err(err) = run_oracle_property(&fixture) {
        panic!("oracle property failed: {err}");
    }
    if let Err(err) = run_padding_property(&fixture) {
        panic!("padding property failed: {err}");
    }
}

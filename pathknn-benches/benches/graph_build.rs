//! Graph construction benchmarks.
//!
//! Measures id normalization and adjacency assembly from pre-generated rows.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use pathknn_benches::{
    error::BenchSetupError,
    params::BuildBenchParams,
    source::{SyntheticConfig, SyntheticGraph},
};
use pathknn_core::Graph;

const SEED: u64 = 7;
const MAX_WEIGHT: i64 = 10_000;
const VERTEX_COUNTS: &[usize] = &[1_000, 10_000];
const DEGREES: &[usize] = &[4, 16];

fn graph_build_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("graph_build");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        for &average_degree in DEGREES {
            let synthetic = SyntheticGraph::generate(&SyntheticConfig {
                vertex_count,
                average_degree,
                max_weight: MAX_WEIGHT,
                seed: SEED,
            })?;
            let params = BuildBenchParams {
                vertex_count,
                average_degree,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                synthetic.rows(),
                |b, rows| {
                    b.iter_batched(
                        || rows.to_vec(),
                        Graph::build,
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn graph_build(c: &mut Criterion) {
    if let Err(err) = graph_build_impl(c) {
        panic!("graph_build benchmark setup failed: {err}");
    }
}

criterion_group!(benches, graph_build);
criterion_main!(benches);

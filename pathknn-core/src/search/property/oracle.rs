//! All-pairs shortest-path oracle for search property verification.
//!
//! Floyd–Warshall over the same transformed distances the graph stores. It
//! shares no code with the truncated search, so agreement between the two
//! is meaningful.

use crate::weight::weight_to_distance;

use super::types::GraphFixture;

/// Dense all-pairs distance matrix; unreachable pairs hold `+inf`.
pub(super) struct DistanceMatrix {
    distances: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Distance between `from` and `to`.
    pub(super) fn get(&self, from: usize, to: usize) -> f64 {
        self.distances[from][to]
    }

    /// Vertices reachable from `source` (excluding itself), nearest first,
    /// ties broken by index.
    pub(super) fn ranked_from(&self, source: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.distances[source]
            .iter()
            .copied()
            .enumerate()
            .filter(|&(vertex, distance)| vertex != source && distance.is_finite())
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

/// Computes shortest-path distances between every pair of fixture vertices.
#[expect(
    clippy::float_arithmetic,
    reason = "the oracle sums path distances"
)]
pub(super) fn floyd_warshall(fixture: &GraphFixture) -> DistanceMatrix {
    let n = fixture.vertex_count;
    let mut distances = vec![vec![f64::INFINITY; n]; n];
    for (vertex, row) in distances.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }
    for &(left, right, weight) in &fixture.edges {
        let Some(distance) = weight_to_distance(weight) else {
            continue;
        };
        if distance < distances[left][right] {
            distances[left][right] = distance;
            distances[right][left] = distance;
        }
    }
    for via in 0..n {
        for from in 0..n {
            let head = distances[from][via];
            if !head.is_finite() {
                continue;
            }
            for to in 0..n {
                let candidate = head + distances[via][to];
                if candidate < distances[from][to] {
                    distances[from][to] = candidate;
                }
            }
        }
    }
    DistanceMatrix { distances }
}

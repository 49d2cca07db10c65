//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

use pathknn_core::ExecutionStrategy;

/// Parameters for a neighbour search run.
#[derive(Clone, Debug)]
pub struct SearchBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Neighbours requested per vertex.
    pub neighbours: usize,
    /// Scheduling strategy.
    pub strategy: ExecutionStrategy,
}

impl fmt::Display for SearchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},k={},{:?}",
            self.vertex_count, self.neighbours, self.strategy
        )
    }
}

/// Parameters for a graph construction run.
#[derive(Clone, Debug)]
pub struct BuildBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Mean number of edges declared per vertex.
    pub average_degree: usize,
}

impl fmt::Display for BuildBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.vertex_count, self.average_degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn labels_are_compact() {
        let search = SearchBenchParams {
            vertex_count: 500,
            neighbours: 15,
            strategy: ExecutionStrategy::Parallel,
        };
        assert_eq!(search.to_string(), "n=500,k=15,Parallel");
        let build = BuildBenchParams {
            vertex_count: 10,
            average_degree: 4,
        };
        assert_eq!(build.to_string(), "n=10,deg=4");
    }
}

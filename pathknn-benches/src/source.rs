//! Seeded synthetic graphs for benchmarking.
//!
//! Vertices are laid out on a ring so every graph is connected, then extra
//! random edges are added until the requested mean degree is reached. Raw
//! weights are drawn uniformly from `1..=max_weight`.

use pathknn_core::{AdjacencyRow, Graph, GraphError, VertexId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("vertex count must be at least 2 (got {got})")]
    TooFewVertices {
        /// Requested vertex count.
        got: usize,
    },
    /// The maximum raw weight was not positive.
    #[error("maximum weight must be positive (got {got})")]
    NonPositiveMaxWeight {
        /// Requested maximum weight.
        got: i64,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Mean number of edges declared per vertex, ring edge included.
    pub average_degree: usize,
    /// Largest raw weight drawn.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Adjacency rows of a random connected graph.
///
/// # Examples
/// ```
/// use pathknn_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { vertex_count: 8, average_degree: 3, max_weight: 100, seed: 7 };
/// let graph = SyntheticGraph::generate(&config)?.build()?;
/// assert_eq!(graph.vertex_count(), 8);
/// # Ok::<(), pathknn_benches::error::BenchSetupError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    rows: Vec<AdjacencyRow>,
}

impl SyntheticGraph {
    /// Generates rows eagerly from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration cannot yield a
    /// connected graph with positive weights.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let n = config.vertex_count;
        if n < 2 {
            return Err(SyntheticError::TooFewVertices { got: n });
        }
        if config.max_weight < 1 {
            return Err(SyntheticError::NonPositiveMaxWeight {
                got: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let extra = config.average_degree.saturating_sub(1);
        let rows = (0..n)
            .map(|vertex| {
                let mut edges = Vec::with_capacity(extra + 1);
                edges.push((id(wrap(vertex + 1, n)), rng.gen_range(1..=config.max_weight)));
                for _ in 0..extra {
                    let target = rng.gen_range(0..n);
                    if target != vertex {
                        edges.push((id(target), rng.gen_range(1..=config.max_weight)));
                    }
                }
                AdjacencyRow::new(id(vertex), edges)
            })
            .collect();
        Ok(Self { rows })
    }

    /// Generated rows in vertex order.
    #[must_use]
    pub fn rows(&self) -> &[AdjacencyRow] {
        &self.rows
    }

    /// Builds a [`Graph`] from a copy of the rows.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from [`Graph::build`].
    pub fn build(&self) -> Result<Graph, GraphError> {
        Graph::build(self.rows.iter().cloned())
    }
}

fn wrap(vertex: usize, n: usize) -> usize {
    if vertex == n { 0 } else { vertex }
}

fn id(vertex: usize) -> VertexId {
    VertexId::new(vertex as u64)
}

//! Nearest-neighbour orchestration for the pathknn library.
//!
//! Provides the [`NearestNeighbours`] runtime entry point, which runs one
//! truncated search per vertex and assembles the padded rows into a
//! [`NeighbourTable`].

use std::num::NonZeroUsize;
#[cfg(feature = "parallel")]
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::ExecutionStrategy,
    error::KnnError,
    graph::Graph,
    neighbour::{NeighbourRow, NeighbourTable},
    search::SearchScratch,
};

/// Entry point for computing neighbour tables.
///
/// # Examples
/// ```
/// use pathknn_core::{AdjacencyRow, Graph, NearestNeighboursBuilder, VertexId};
///
/// let graph = Graph::build([
///     AdjacencyRow::new(VertexId::new(10), vec![(VertexId::new(20), 9)]),
///     AdjacencyRow::new(VertexId::new(20), vec![(VertexId::new(30), 9)]),
///     AdjacencyRow::isolated(VertexId::new(40)),
/// ])?;
/// let knn = NearestNeighboursBuilder::new()
///     .with_neighbour_count(2)
///     .build()?;
/// let table = knn.run(&graph)?;
/// assert_eq!(table.len(), 4);
/// assert!(table.rows().iter().all(|row| row.len() == 2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbours {
    neighbour_count: NonZeroUsize,
    execution_strategy: ExecutionStrategy,
    threads: Option<NonZeroUsize>,
}

impl NearestNeighbours {
    pub(crate) fn new(
        neighbour_count: NonZeroUsize,
        execution_strategy: ExecutionStrategy,
        threads: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            neighbour_count,
            execution_strategy,
            threads,
        }
    }

    /// Returns the number of neighbours reported per vertex.
    #[must_use]
    pub fn neighbour_count(&self) -> NonZeroUsize {
        self.neighbour_count
    }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the dedicated worker pool size, if one was configured.
    #[must_use]
    pub fn threads(&self) -> Option<NonZeroUsize> {
        self.threads
    }

    /// Computes a padded neighbour row for every vertex of `graph`.
    ///
    /// Rows are returned in ascending source order regardless of strategy.
    /// When the neighbour count is not smaller than the vertex count, rows
    /// hold every other vertex and therefore fewer than `k` records.
    ///
    /// # Errors
    /// Returns [`KnnError::EmptyGraph`] when the graph has no vertices,
    /// [`KnnError::BackendUnavailable`] when parallel execution is requested
    /// without the `parallel` feature, and [`KnnError::ThreadPool`] when a
    /// dedicated pool cannot be created.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            neighbours = %self.neighbour_count,
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<NeighbourTable> {
        if graph.is_empty() {
            warn!("graph is empty, returning error");
            return Err(KnnError::EmptyGraph);
        }
        let k = self.neighbour_count.get();
        if k >= graph.vertex_count() {
            warn!(
                vertices = graph.vertex_count(),
                neighbours = k,
                "neighbour count is not smaller than the vertex count; rows will be shorter"
            );
        }

        let rows = match self.execution_strategy {
            ExecutionStrategy::Sequential => self.run_sequential(graph),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => self.run_parallel(graph)?,
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => self.run_sequential(graph),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => {
                return Err(KnnError::BackendUnavailable {
                    requested: ExecutionStrategy::Parallel,
                });
            }
        };

        let padded = rows.iter().filter(|row| row.real_count() < k).count();
        info!(rows = rows.len(), padded_rows = padded, "search completed");
        Ok(NeighbourTable::from_rows(rows))
    }

    fn run_sequential(&self, graph: &Graph) -> Vec<NeighbourRow> {
        let k = self.neighbour_count.get();
        let mut scratch = SearchScratch::new(graph.vertex_count());
        (0..graph.vertex_count())
            .map(|source| scratch.search(graph, source, k))
            .collect()
    }

    /// Every rayon job owns its scratch, so concurrent searches never share
    /// tentative distances or touch stamps.
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    fn run_parallel(&self, graph: &Graph) -> Result<Vec<NeighbourRow>> {
        let k = self.neighbour_count.get();
        let vertices = graph.vertex_count();
        let search = || {
            (0..vertices)
                .into_par_iter()
                .map_init(
                    || SearchScratch::new(vertices),
                    |scratch, source| scratch.search(graph, source, k),
                )
                .collect::<Vec<_>>()
        };

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads.get())
                    .build()
                    .map_err(|err| KnnError::ThreadPool {
                        threads: threads.get(),
                        message: Arc::from(err.to_string()),
                    })?;
                Ok(pool.install(search))
            }
            None => Ok(search()),
        }
    }
}

//! Builder utilities for configuring nearest-neighbour runs.
//!
//! Exposes the execution strategy selection surface and builder validation used before constructing [`NearestNeighbours`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::KnnError, knn::NearestNeighbours};

/// Default neighbour count, matching three times the usual t-SNE perplexity
/// of fifty.
pub const DEFAULT_NEIGHBOUR_COUNT: usize = 150;

/// Indicates how [`NearestNeighbours`] schedules per-vertex searches when
/// [`NearestNeighbours::run`] is invoked.
///
/// `Auto` resolves deterministically: it runs in parallel when the
/// `parallel` feature is compiled in and sequentially otherwise. Output is
/// identical under every strategy.
///
/// # Examples
/// ```
/// use pathknn_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select an appropriate scheduler automatically.
    Auto,
    /// Run every search on the calling thread.
    Sequential,
    /// Run searches on a rayon worker pool.
    Parallel,
}

/// Configures and constructs [`NearestNeighbours`] instances.
///
/// # Examples
/// ```
/// use pathknn_core::{ExecutionStrategy, NearestNeighboursBuilder};
///
/// let knn = NearestNeighboursBuilder::new()
///     .with_neighbour_count(8)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(knn.neighbour_count().get(), 8);
/// assert_eq!(knn.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighboursBuilder {
    neighbour_count: usize,
    execution_strategy: ExecutionStrategy,
    threads: Option<NonZeroUsize>,
}

impl Default for NearestNeighboursBuilder {
    fn default() -> Self {
        Self {
            neighbour_count: DEFAULT_NEIGHBOUR_COUNT,
            execution_strategy: ExecutionStrategy::Auto,
            threads: None,
        }
    }
}

impl NearestNeighboursBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use pathknn_core::{ExecutionStrategy, NearestNeighboursBuilder};
    ///
    /// let builder = NearestNeighboursBuilder::new();
    /// assert_eq!(builder.neighbour_count(), 150);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.threads(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of neighbours reported per vertex.
    #[must_use]
    pub fn with_neighbour_count(mut self, count: usize) -> Self {
        self.neighbour_count = count;
        self
    }

    /// Returns the configured neighbour count.
    #[must_use]
    pub fn neighbour_count(&self) -> usize {
        self.neighbour_count
    }

    /// Sets the execution strategy to use when running searches.
    ///
    /// # Examples
    /// ```
    /// use pathknn_core::{ExecutionStrategy, NearestNeighboursBuilder};
    ///
    /// let builder =
    ///     NearestNeighboursBuilder::new().with_execution_strategy(ExecutionStrategy::Parallel);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Parallel);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Runs parallel searches on a dedicated pool with `threads` workers
    /// instead of the global rayon pool. `None` restores the default.
    #[must_use]
    pub fn with_threads(mut self, threads: Option<NonZeroUsize>) -> Self {
        self.threads = threads;
        self
    }

    /// Returns the dedicated pool size, if one was requested.
    #[must_use]
    pub fn threads(&self) -> Option<NonZeroUsize> {
        self.threads
    }

    /// Validates the configuration and constructs a [`NearestNeighbours`] instance.
    ///
    /// # Errors
    /// Returns [`KnnError::InvalidNeighbourCount`] when the neighbour count is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use pathknn_core::{KnnError, NearestNeighboursBuilder};
    ///
    /// let err = NearestNeighboursBuilder::new()
    ///     .with_neighbour_count(0)
    ///     .build()
    ///     .expect_err("zero neighbours must be rejected");
    /// assert_eq!(err, KnnError::InvalidNeighbourCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<NearestNeighbours> {
        let neighbour_count = NonZeroUsize::new(self.neighbour_count).ok_or(
            KnnError::InvalidNeighbourCount {
                got: self.neighbour_count,
            },
        )?;

        Ok(NearestNeighbours::new(
            neighbour_count,
            self.execution_strategy,
            self.threads,
        ))
    }
}

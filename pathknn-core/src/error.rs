//! Error types for the pathknn core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{builder::ExecutionStrategy, vertex::VertexId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`].
///
/// Any of these aborts ingestion; no partially built graph is returned.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A raw edge weight was zero or negative, so no distance can be derived.
    #[error("edge {source_id} -> {target_id} has non-positive weight {weight}")]
    NonPositiveWeight {
        /// External id of the row that declared the edge.
        source_id: VertexId,
        /// External id of the edge destination.
        target_id: VertexId,
        /// The rejected raw weight.
        weight: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A raw edge weight was zero or negative.
        NonPositiveWeight => NonPositiveWeight { .. } => "GRAPH_NON_POSITIVE_WEIGHT",
    }
}

/// Error type produced when configuring or running [`crate::NearestNeighbours`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KnnError {
    /// The neighbour count must be greater than zero.
    #[error("neighbour count must be at least 1 (got {got})")]
    InvalidNeighbourCount {
        /// The invalid neighbour count supplied by the caller.
        got: usize,
    },
    /// The supplied [`crate::Graph`] contained no vertices.
    #[error("graph contains no vertices")]
    EmptyGraph,
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// A dedicated worker pool could not be created.
    #[error("failed to build a worker pool with {threads} threads: {message}")]
    ThreadPool {
        /// Number of threads requested for the pool.
        threads: usize,
        /// Message reported by the pool builder.
        message: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`KnnError`] variants.
    enum KnnErrorCode for KnnError {
        /// The neighbour count must be greater than zero.
        InvalidNeighbourCount => InvalidNeighbourCount { .. } => "KNN_INVALID_NEIGHBOUR_COUNT",
        /// The supplied graph contained no vertices.
        EmptyGraph => EmptyGraph => "KNN_EMPTY_GRAPH",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "KNN_BACKEND_UNAVAILABLE",
        /// A dedicated worker pool could not be created.
        ThreadPool => ThreadPool { .. } => "KNN_THREAD_POOL",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KnnError>;

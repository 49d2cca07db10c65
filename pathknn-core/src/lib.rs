//! pathknn core library.
//!
//! Computes, for every vertex of a weighted undirected graph, the `k`
//! nearest vertices under shortest-path distance. Raw closeness weights are
//! inverted into distances, external vertex ids are densified, and a
//! truncated Dijkstra search runs independently per vertex. Rows are padded
//! with infinite-distance placeholders so each one has a fixed width.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod knn;
mod neighbour;
mod output;
mod padding;
mod search;
#[cfg(test)]
mod test_utils;
mod vertex;
mod weight;

pub use crate::{
    builder::{DEFAULT_NEIGHBOUR_COUNT, ExecutionStrategy, NearestNeighboursBuilder},
    error::{GraphError, GraphErrorCode, KnnError, KnnErrorCode, Result},
    graph::{AdjacencyRow, Edge, Graph, GraphBuilder},
    knn::NearestNeighbours,
    neighbour::{Neighbour, NeighbourRow, NeighbourTable},
    output::{write_mapping, write_row, write_table},
    padding::pad_row,
    search::SearchScratch,
    vertex::{VertexId, VertexRegistry},
    weight::{DISTANCE_SCALE, weight_to_distance},
};

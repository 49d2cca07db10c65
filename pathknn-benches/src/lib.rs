//! Benchmark support crate for pathknn.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for graph construction and neighbour search.

pub mod error;
pub mod params;
pub mod source;

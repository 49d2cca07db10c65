//! Shared test utilities used across pathknn crates.
//!
//! [`tracing`] captures spans and events so suites can assert on
//! instrumentation, and [`ci`] holds environment-driven run profiles.

pub mod ci;
pub mod tracing;

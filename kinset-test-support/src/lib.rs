//! Shared test utilities used across kinset crates.

pub mod graphs;
pub mod tracing;

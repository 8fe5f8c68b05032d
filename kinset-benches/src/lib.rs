//! Benchmark support crate for kinset.
//!
//! Provides seeded graph workloads and parameter types used by the Criterion
//! benchmarks for the disjoint set and the component counters.

pub mod error;
pub mod params;
pub mod workload;

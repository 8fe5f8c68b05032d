//! Seeded random graph workloads.
//!
//! Edges are drawn uniformly, so self-loops and repeats occur at the rate a
//! real unclean edge dump would have them.

use kinset_core::EdgeList;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Draws `params.edge_count` random pairs over `params.node_count` nodes.
///
/// # Errors
/// Returns [`BenchSetupError::NoNodes`] when edges are requested on an empty
/// graph.
pub fn random_pairs(
    params: GraphBenchParams,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    let GraphBenchParams {
        node_count,
        edge_count,
    } = params;
    if node_count == 0 && edge_count > 0 {
        return Err(BenchSetupError::NoNodes { edge_count });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect())
}

/// Builds a validated [`EdgeList`] from [`random_pairs`].
///
/// # Errors
/// Propagates [`BenchSetupError`] from pair generation or validation.
pub fn random_edge_list(params: GraphBenchParams, seed: u64) -> Result<EdgeList, BenchSetupError> {
    let pairs = random_pairs(params, seed)?;
    Ok(EdgeList::new(params.node_count, pairs)?)
}

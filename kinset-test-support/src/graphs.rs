//! Deterministic graph fixtures.
//!
//! Fixtures return plain rows and pairs rather than kinset types so that
//! crates depending on this one are free to build whichever representation
//! they are testing.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The 4x4 block-diagonal matrix `{{1,1,0,0},{1,1,0,0},{0,0,1,1},{0,0,1,1}}`,
/// which has two components.
#[must_use]
pub fn two_block_matrix() -> Vec<Vec<u8>> {
    vec![
        vec![1, 1, 0, 0],
        vec![1, 1, 0, 0],
        vec![0, 0, 1, 1],
        vec![0, 0, 1, 1],
    ]
}

/// Edges of a path `0 - 1 - ... - (node_count - 1)`.
///
/// # Examples
/// ```
/// use kinset_test_support::graphs::path_edges;
///
/// assert_eq!(path_edges(3), vec![(0, 1), (1, 2)]);
/// assert!(path_edges(0).is_empty());
/// ```
#[must_use]
pub fn path_edges(node_count: usize) -> Vec<(usize, usize)> {
    (1..node_count).map(|node| (node - 1, node)).collect()
}

/// A random forest over `node_count` nodes with `edge_count` edges, capped at
/// `node_count - 1`.
///
/// Every node `i > 0` is offered one edge to a random lower node; a seeded
/// shuffle then keeps `edge_count` of those candidates. The result has no
/// cycles, no duplicates and no self-loops, so it splits the nodes into
/// exactly `node_count - edges.len()` components.
#[must_use]
pub fn random_forest(node_count: usize, edge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut candidates: Vec<(usize, usize)> = (1..node_count)
        .map(|node| (rng.gen_range(0..node), node))
        .collect();
    candidates.shuffle(&mut rng);
    candidates.truncate(edge_count);
    candidates
}

/// `edge_count` uniformly random pairs over `node_count` nodes. Pairs may
/// repeat or be self-loops.
#[must_use]
pub fn random_edges(node_count: usize, edge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    if node_count == 0 {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(10, 4, 1)]
    #[case(10, 20, 2)]
    #[case(1, 3, 3)]
    fn random_forest_is_acyclic_and_capped(
        #[case] node_count: usize,
        #[case] edge_count: usize,
        #[case] seed: u64,
    ) {
        let forest = random_forest(node_count, edge_count, seed);
        assert_eq!(forest.len(), edge_count.min(node_count.saturating_sub(1)));

        let targets: HashSet<usize> = forest.iter().map(|&(_, target)| target).collect();
        assert_eq!(targets.len(), forest.len(), "each node has at most one parent");
        assert!(forest.iter().all(|&(source, target)| source < target));
    }

    #[test]
    fn fixtures_are_reproducible() {
        assert_eq!(random_forest(30, 12, 9), random_forest(30, 12, 9));
        assert_eq!(random_edges(30, 12, 9), random_edges(30, 12, 9));
    }

    #[test]
    fn random_edges_stay_in_range() {
        assert!(random_edges(0, 5, 1).is_empty());
        assert!(random_edges(7, 50, 4).iter().all(|&(a, b)| a < 7 && b < 7));
    }
}

//! # Random Network Generation
//!
//! Produces road lists and complete input files in the line-oriented format
//! read by [`crate::input`]. Identifiers are drawn from `1..=n_shops` and both
//! ends of a road always differ, so the output is accepted by the default
//! [`crate::input::Limits`] whenever the counts are in range.

use itertools::Itertools;
use rand::{Rng, SeedableRng};

use crate::network::ShopId;

/// Generates `n_roads` random roads between shops `1..=n_shops`.
///
/// Parallel roads may occur; self-roads never do.
///
/// # Arguments
/// * `n_shops` - Number of distinct identifiers to draw from. Must be at least 2.
/// * `n_roads` - Number of roads to emit.
/// * `seed` - An optional seed for the random number generator for reproducibility.
pub fn generate_roads(n_shops: u64, n_roads: usize, seed: Option<u64>) -> Vec<(ShopId, ShopId)> {
    assert!(n_shops >= 2, "need at least two shops to draw a road");
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };

    (0..n_roads)
        .map(|_| {
            let a = rng.random_range(1..=n_shops);
            // Draw from the remaining n_shops - 1 identifiers and skip over `a`.
            let mut b = rng.random_range(1..n_shops);
            if b >= a {
                b += 1;
            }
            (a, b)
        })
        .collect()
}

/// Renders a complete input file: the header followed by one road per line.
pub fn render_input(n_shops: u64, roads: &[(ShopId, ShopId)]) -> String {
    let mut out = format!("{} {}\n", n_shops, roads.len());
    out.push_str(&roads.iter().map(|(a, b)| format!("{} {}\n", a, b)).join(""));
    out
}

/// Shorthand for [`generate_roads`] followed by [`render_input`].
pub fn generate_input(n_shops: u64, n_roads: usize, seed: Option<u64>) -> String {
    render_input(n_shops, &generate_roads(n_shops, n_roads, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_roads() {
        let roads = generate_roads(10, 40, Some(123));
        assert_eq!(roads.len(), 40);
        for &(a, b) in &roads {
            assert_ne!(a, b, "roads: {:?}", roads);
            assert!((1..=10).contains(&a));
            assert!((1..=10).contains(&b));
        }
        assert_eq!(roads, generate_roads(10, 40, Some(123)));
    }

    #[test]
    fn test_two_shops_always_connect_each_other() {
        for &(a, b) in &generate_roads(2, 20, Some(7)) {
            assert_eq!(a + b, 3);
        }
    }

    #[test]
    fn test_render_input() {
        let text = render_input(3, &[(1, 2), (3, 1)]);
        assert_eq!(text, "3 2\n1 2\n3 1\n");
    }

    #[test]
    fn test_generated_input_is_accepted() {
        let text = generate_input(1000, 1000, Some(42));
        let list = crate::input::RoadList::parse(&text).unwrap();
        assert_eq!(list.declared_shops, 1000);
        assert_eq!(list.roads.len(), 1000);
        assert_eq!(list.skipped, 0);
        let network = list.build();
        assert_eq!(network.total_edge_endpoints(), 2000);
    }
}

//! # Shop Network
//!
//! The graph store. Every shop lives in a single ordered map owned by
//! [`Network`]; roads are recorded as identifier links in both endpoints'
//! adjacency lists, so a link never owns the shop it points at.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{NetworkError, Result};

/// Identifier of a shop as it appears in the input.
pub type ShopId = u64;

/// A single vertex of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    id: ShopId,
    connected: Vec<ShopId>,
}

impl Shop {
    fn new(id: ShopId) -> Self {
        Self {
            id,
            connected: vec![],
        }
    }

    pub fn id(&self) -> ShopId {
        self.id
    }

    /// Neighbours in road insertion order. Parallel roads appear once per road.
    pub fn connected_shops(&self) -> &[ShopId] {
        &self.connected
    }

    pub fn degree(&self) -> usize {
        self.connected.len()
    }
}

/// Undirected multigraph of shops keyed by identifier.
///
/// The network only grows: shops are created the first time a road mentions
/// them and are released together when the network is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    shops: BTreeMap<ShopId, Shop>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network by inserting every road in order.
    pub fn from_roads<I>(roads: I) -> Self
    where
        I: IntoIterator<Item = (ShopId, ShopId)>,
    {
        roads.into_iter().collect()
    }

    /// Returns the shop registered under `id`, registering an unconnected one first if needed.
    pub fn get_or_create(&mut self, id: ShopId) -> &mut Shop {
        self.shops.entry(id).or_insert_with(|| Shop::new(id))
    }

    /// Connects `a` and `b` symmetrically. Missing endpoints are created.
    pub fn add_edge(&mut self, a: ShopId, b: ShopId) {
        self.get_or_create(a).connected.push(b);
        self.get_or_create(b).connected.push(a);
    }

    pub fn lookup(&self, id: ShopId) -> Result<&Shop> {
        self.shops.get(&id).ok_or(NetworkError::NotFound(id))
    }

    pub fn contains(&self, id: ShopId) -> bool {
        self.shops.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// Shops in ascending identifier order.
    pub fn shops(&self) -> impl ExactSizeIterator<Item = &Shop> + '_ {
        self.shops.values()
    }

    /// Sum of all adjacency list lengths, i.e. twice the number of roads.
    pub fn total_edge_endpoints(&self) -> usize {
        self.shops.values().map(Shop::degree).sum()
    }

    pub fn max_degree(&self) -> Option<usize> {
        self.shops.values().map(Shop::degree).max()
    }
}

impl FromIterator<(ShopId, ShopId)> for Network {
    fn from_iter<I: IntoIterator<Item = (ShopId, ShopId)>>(iter: I) -> Self {
        let mut network = Network::new();
        network.extend(iter);
        network
    }
}

impl Extend<(ShopId, ShopId)> for Network {
    fn extend<I: IntoIterator<Item = (ShopId, ShopId)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.add_edge(a, b);
        }
    }
}

/// Adjacency dump, one line per recorded endpoint.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shop in self.shops.values() {
            for remote in &shop.connected {
                writeln!(f, "{} is connected with {}", shop.id, remote)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_unknown_shop_is_not_found() {
        let network = Network::new();
        assert_eq!(network.lookup(7), Err(NetworkError::NotFound(7)));
        assert!(network.is_empty());
    }

    #[test]
    fn add_edge_creates_both_endpoints() {
        let mut network = Network::new();
        assert!(network.lookup(3).is_err());
        network.add_edge(3, 9);

        let shop = network.lookup(3).expect("3 should exist after add_edge");
        assert_eq!(shop.id(), 3);
        assert_eq!(shop.connected_shops(), &[9]);
        assert_eq!(network.lookup(9).unwrap().connected_shops(), &[3]);
        assert_eq!(network.len(), 2);
    }

    #[test]
    fn get_or_create_returns_existing_shop() {
        let mut network = Network::new();
        network.add_edge(1, 2);
        let shop = network.get_or_create(1);
        assert_eq!(shop.degree(), 1);
        let fresh = network.get_or_create(5);
        assert_eq!(fresh.degree(), 0);
        assert_eq!(network.len(), 3);
    }

    #[test]
    fn parallel_roads_are_kept() {
        let network = Network::from_roads([(1, 2), (2, 1), (1, 3)]);
        assert_eq!(network.lookup(1).unwrap().connected_shops(), &[2, 2, 3]);
        assert_eq!(network.lookup(2).unwrap().degree(), 2);
        assert_eq!(network.total_edge_endpoints(), 6);
        assert_eq!(network.max_degree(), Some(3));
    }

    #[test]
    fn links_never_dangle() {
        let network = Network::from_roads([(10, 20), (20, 30), (40, 10), (30, 40), (50, 20)]);
        for shop in network.shops() {
            for &remote in shop.connected_shops() {
                assert!(network.contains(remote), "dangling link {} -> {}", shop.id(), remote);
            }
        }
        let ids: Vec<_> = network.shops().map(Shop::id).collect();
        assert_eq!(ids, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn display_dumps_every_endpoint() {
        let network = Network::from_roads([(2, 1), (1, 3)]);
        assert_eq!(
            network.to_string(),
            "1 is connected with 2\n1 is connected with 3\n2 is connected with 1\n3 is connected with 1\n"
        );
    }
}

//! # Network Reduction
//!
//! Two-stage hub filter over a finished [`Network`]:
//!
//! 1. keep every shop whose degree equals the maximum degree (the hubs),
//! 2. among the hubs, keep every shop whose external impact (the summed degree
//!    of its neighbours that are not hubs themselves) equals the maximum impact.
//!
//! Ties are always kept in full. Fewer than two survivors means there is
//! nothing left to reduce and the result is `0`.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::SetMinMax as _;
use crate::error::{NetworkError, Result};
use crate::network::{Network, Shop, ShopId};

/// Every intermediate value of a reduction, in ascending shop order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// Maximum degree over the whole network.
    pub threshold: usize,
    /// Shops whose degree reaches `threshold`.
    pub hubs: Vec<ShopId>,
    /// External impact of each hub, aligned with `hubs`.
    pub impacts: Vec<u64>,
    /// Maximum over `impacts`.
    pub required_impact: u64,
    /// Hubs whose impact reaches `required_impact`.
    pub survivors: Vec<ShopId>,
}

impl Reduction {
    /// Number of survivors, or `0` when fewer than two remain.
    pub fn count(&self) -> usize {
        if self.survivors.len() < 2 {
            0
        } else {
            self.survivors.len()
        }
    }
}

/// Runs both filter stages and returns the survivor count.
pub fn reduce(network: &Network) -> Result<usize> {
    analyze(network).map(|reduction| reduction.count())
}

/// Same as [`reduce`] but keeps the intermediate sets for inspection.
pub fn analyze(network: &Network) -> Result<Reduction> {
    let shops = network.shops().collect::<Vec<_>>();
    if shops.is_empty() {
        return Err(NetworkError::EmptyGraph);
    }

    let mut threshold = 0;
    for shop in &shops {
        threshold.setmax(shop.degree());
    }
    let hubs = shops
        .into_iter()
        .filter(|shop| shop.degree() >= threshold)
        .collect::<Vec<_>>();

    let hub_ids = hubs.iter().map(|shop| shop.id()).collect::<FxHashSet<_>>();
    // Impacts are independent per hub; only the maximum below needs a single pass.
    let impacts = hubs
        .par_iter()
        .map(|shop| external_impact(network, shop, &hub_ids))
        .collect::<Result<Vec<_>>>()?;
    let required_impact = impacts
        .iter()
        .copied()
        .max()
        .ok_or(NetworkError::EmptyGraph)?;

    let survivors = hubs
        .iter()
        .zip(&impacts)
        .filter(|&(_, &impact)| impact >= required_impact)
        .map(|(shop, _)| shop.id())
        .collect();

    Ok(Reduction {
        threshold,
        hubs: hubs.iter().map(|shop| shop.id()).collect(),
        impacts,
        required_impact,
        survivors,
    })
}

/// Summed degree of `shop`'s neighbours outside `hubs`, counted once per road.
fn external_impact(network: &Network, shop: &Shop, hubs: &FxHashSet<ShopId>) -> Result<u64> {
    let mut impact = 0;
    for &remote in shop.connected_shops() {
        if !hubs.contains(&remote) {
            impact += network.lookup(remote)?.degree() as u64;
        }
    }
    Ok(impact)
}

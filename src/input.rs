//! # Input Reading
//!
//! Parses the line-oriented network description and turns it into a
//! [`Network`]. The first line holds `shops roads`; each of the following
//! `roads` lines holds one road `a b`.
//!
//! Everything here may log through `tracing`: skipped roads and count
//! mismatches are warnings, shop instantiation is traced at debug level.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::network::{Network, ShopId};

/// Accepted ranges for the header counts and for shop identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    pub shops: RangeInclusive<u64>,
    pub roads: RangeInclusive<u64>,
    pub ids: RangeInclusive<ShopId>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            shops: 2..=1000,
            roads: 1..=1000,
            ids: 1..=1000,
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("parsing error: input is empty, expected a header")]
    MissingHeader,

    #[error("parsing error: couldn't parse header - \"{0}\"")]
    MalformedHeader(String),

    #[error("argument error: number of shops should be in between {} to {} inclusive: {count}", .range.start(), .range.end())]
    ShopCountOutOfRange { count: u64, range: RangeInclusive<u64> },

    #[error("argument error: number of roads should be in between {} to {} inclusive: {count}", .range.start(), .range.end())]
    RoadCountOutOfRange { count: u64, range: RangeInclusive<u64> },

    #[error("parsing error: unexpected char stray at line {line} - \"{content}\"")]
    MalformedRoad { line: usize, content: String },
}

/// Validated roads together with the counts declared in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadList {
    pub declared_shops: u64,
    pub declared_roads: u64,
    /// Roads in input order, out-of-range lines already removed.
    pub roads: Vec<(ShopId, ShopId)>,
    /// Number of road lines dropped for out-of-range identifiers.
    pub skipped: usize,
}

fn parse_pair(line: &str) -> Option<(u64, u64)> {
    let mut tokens = line.split_whitespace();
    let a = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    Some((a, b))
}

impl RoadList {
    /// Parses `text` with the default [`Limits`].
    pub fn parse(text: &str) -> Result<Self, InputError> {
        Self::read(text.as_bytes(), &Limits::default())
    }

    pub fn from_path(path: impl AsRef<Path>, limits: &Limits) -> Result<Self, InputError> {
        let file = fs::File::open(path)?;
        Self::read(BufReader::new(file), limits)
    }

    pub fn read<R: BufRead>(reader: R, limits: &Limits) -> Result<Self, InputError> {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(InputError::MissingHeader)??;
        let (declared_shops, declared_roads) =
            parse_pair(&header).ok_or_else(|| InputError::MalformedHeader(header.clone()))?;
        if !limits.shops.contains(&declared_shops) {
            return Err(InputError::ShopCountOutOfRange {
                count: declared_shops,
                range: limits.shops.clone(),
            });
        }
        if !limits.roads.contains(&declared_roads) {
            return Err(InputError::RoadCountOutOfRange {
                count: declared_roads,
                range: limits.roads.clone(),
            });
        }

        let mut roads = Vec::with_capacity(declared_roads as usize);
        let mut skipped = 0;
        let mut consumed = 0;
        for (i, line) in lines.take(declared_roads as usize).enumerate() {
            let line = line?;
            let line_no = i + 2;
            consumed += 1;
            let (a, b) = parse_pair(&line).ok_or_else(|| InputError::MalformedRoad {
                line: line_no,
                content: line.clone(),
            })?;
            if let Some(id) = [a, b].into_iter().find(|id| !limits.ids.contains(id)) {
                warn!(
                    "identifier for shop at line {} is not in range {} to {} inclusive: {}",
                    line_no,
                    limits.ids.start(),
                    limits.ids.end(),
                    id
                );
                skipped += 1;
                continue;
            }
            roads.push((a, b));
        }
        if consumed < declared_roads {
            warn!(
                "header declares {} roads but only {} lines follow",
                declared_roads, consumed
            );
        }

        Ok(Self {
            declared_shops,
            declared_roads,
            roads,
            skipped,
        })
    }

    /// Inserts every road into a fresh network.
    pub fn build(&self) -> Network {
        let mut network = Network::new();
        for &(a, b) in &self.roads {
            if !network.contains(a) {
                debug!("source shop with identifier {} is being instantiated", a);
            }
            if a != b && !network.contains(b) {
                debug!("destination shop with identifier {} is being instantiated", b);
            }
            network.add_edge(a, b);
        }
        if network.len() as u64 != self.declared_shops {
            warn!(
                "header declares {} shops but roads mention {}",
                self.declared_shops,
                network.len()
            );
        }
        debug!("network:\n{}", network);
        debug!("network size: {}", network.total_edge_endpoints());
        network
    }
}

// # Shopnet: Shop Network Reduction
//
// Reads a network of shops connected by roads, builds the adjacency store and
// counts the shops that survive a two-stage hub filter (`reduce`).
//
// The core (`network`, `reduce`) is silent and pure; reading and validating
// input, and all logging, live in `input` and the binaries.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// Errors raised by the graph store and the reducer.
pub mod error;

/// The graph store: shops keyed by identifier and their adjacency lists.
pub mod network;

/// The two-stage degree/impact filter.
pub mod reduce;

/// Parsing and validation of the line-oriented input format.
pub mod input;

/// Named built-in networks with known results.
pub mod samples;

/// Tools for generating input networks.
pub mod mapgen {
    /// A module for generating random networks.
    pub mod random;
}

pub use error::NetworkError;
pub use network::{Network, Shop, ShopId};
pub use reduce::{Reduction, analyze, reduce};

/// Installs a stderr `tracing` subscriber for the binaries.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` or `warn`.
pub fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use thiserror::Error;

use crate::network::ShopId;

/// Failures reported by the graph store and the reducer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// `reduce` was asked to work on a network without shops.
    #[error("network has no shops to reduce")]
    EmptyGraph,

    #[error("shop not found: {0}")]
    NotFound(ShopId),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

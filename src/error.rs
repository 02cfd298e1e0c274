use thiserror::Error;

/// Errors raised when a buffer cannot be built.
///
/// Reads never fail: an out-of-range or empty-state query is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("circular buffer capacity must be at least 1")]
    ZeroCapacity,
    #[error("invalid circular buffer capacity: {0:?}")]
    InvalidCapacity(String),
}

pub type Result<T> = std::result::Result<T, Error>;

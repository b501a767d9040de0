//! Error types for geoprim.

use thiserror::Error;

/// Errors raised by the checked accessors.
///
/// Geometric queries never fail: a miss is a `false` or `None`, and an
/// empty intersection is the sentinel box.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// A component index outside `0..=2`.
    #[error("component index {component} out of range, expected 0..=2")]
    ComponentOutOfRange {
        /// The rejected index.
        component: usize,
    },
}

/// Result type for geoprim operations.
pub type Result<T> = std::result::Result<T, GeomError>;

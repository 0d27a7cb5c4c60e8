//! Error types for tensor4d

use thiserror::Error;

/// Result type alias using tensor4d's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or combining tensors
#[derive(Error, Debug)]
pub enum Error {
    /// An extent is zero
    #[error("Invalid shape {extents:?}: every extent must be >= 1")]
    InvalidShape {
        /// The rejected extents
        extents: [usize; 4],
    },

    /// No source data was given to copy from
    #[error("Source data is absent")]
    NullSource,

    /// The right-hand side cannot broadcast into the left-hand side
    #[error("Cannot broadcast {rhs:?} into {lhs:?} (axis {axis})")]
    IncompatibleShape {
        /// Shape of the tensor being updated
        lhs: [usize; 4],
        /// Shape of the tensor being added
        rhs: [usize; 4],
        /// First axis where the shapes disagree
        axis: usize,
    },

    /// Source slice length differs from the element count of the shape
    #[error("Source length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// product(extents)
        expected: usize,
        /// Length of the source slice
        actual: usize,
    },

    /// product(extents) does not fit in usize
    #[error("Element count of {extents:?} overflows usize")]
    SizeOverflow {
        /// The rejected extents
        extents: [usize; 4],
    },
}

impl Error {
    /// Create an incompatible shape error
    pub fn incompatible(lhs: [usize; 4], rhs: [usize; 4], axis: usize) -> Self {
        Self::IncompatibleShape { lhs, rhs, axis }
    }
}

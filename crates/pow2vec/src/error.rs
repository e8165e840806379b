//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every failing call leaves the container exactly as it was before the
/// call: no partial mutation is observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// An index or insertion position lies outside the valid bounds for
    /// the current length.
    IndexOutOfRange {
        /// The offending index (for ranges, the first bound that failed).
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
    /// `front`, `back` or `pop_back` on a zero-length container.
    EmptyContainer,
    /// The required capacity has no power of two representable in
    /// `usize`, or its size in bytes exceeds `isize::MAX`.
    CapacityOverflow {
        /// Number of elements the operation needed room for.
        requested: usize,
    },
    /// The allocator refused to provide the new buffer.
    AllocationFailed {
        /// Capacity (in elements) of the buffer that could not be allocated.
        capacity: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: no power-of-two capacity fits {requested} elements")
            }
            Self::AllocationFailed { capacity } => {
                write!(f, "allocation failed for a buffer of {capacity} elements")
            }
        }
    }
}

impl Error for VecError {}

//! Error types for plate lookup.

use crate::group::SEQUENCE_LEN;

/// Errors returned when resolving a sequence index to a plate.
///
/// Both kinds indicate caller mistakes and are not retryable: the lookup is
/// deterministic, so the same input always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlateError {
    /// The input was not a non-negative integer (negative, fractional, or
    /// non-numeric).
    #[display("invalid index: expected a non-negative integer")]
    InvalidIndex,
    /// The index is past the end of the sequence; `max` is the largest valid
    /// index.
    #[display("index out of range: maximum valid index is {max}")]
    OutOfRange {
        /// The largest valid sequence index.
        max: u64,
    },
}

impl PlateError {
    /// The out-of-range error for the fixed 6-symbol scheme, carrying the
    /// maximum valid index.
    #[must_use]
    pub const fn out_of_range() -> Self {
        Self::OutOfRange {
            max: SEQUENCE_LEN - 1,
        }
    }
}

//! Error types for schedules, fixings, and trade resolution.

use thiserror::Error;

use valmark_core::{Date, ValmarkError};

/// A specialized Result type for swap operations.
pub type SwapResult<T> = Result<T, SwapError>;

/// Error types for schedule generation and index projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// A convention code in the trade did not resolve.
    #[error(transparent)]
    Convention(#[from] ValmarkError),

    /// The schedule parameters cannot produce a valid period sequence.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the problem.
        message: String,
    },

    /// Fixing dates and rates have different lengths.
    #[error("Fixing sequences must be of equal length: {dates} dates, {rates} rates")]
    FixingLengthMismatch {
        /// Length of the fixing date sequence.
        dates: usize,
        /// Length of the fixing rate sequence.
        rates: usize,
    },

    /// The floating index name was not recognized.
    #[error("Unknown floating rate index: {name:?}")]
    UnknownIndex {
        /// The offending index name.
        name: String,
    },

    /// Forward projection over an empty or inverted accrual interval.
    #[error("Degenerate forward interval: {start} to {end}")]
    DegenerateForward {
        /// Interval start.
        start: Date,
        /// Interval end.
        end: Date,
    },
}

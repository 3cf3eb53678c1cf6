//! Error types for the Valmark core library.
//!
//! This module defines the error types used by the date, calendar, and
//! convention layers, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Valmark core operations.
pub type ValmarkResult<T> = Result<T, ValmarkError>;

/// The main error type for Valmark core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValmarkError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Calendar code was not recognized.
    #[error("Unsupported calendar: {code:?}")]
    UnsupportedCalendar {
        /// The offending calendar code.
        code: String,
    },

    /// Day count code was not recognized.
    #[error("Unsupported day count convention: {code:?}")]
    UnsupportedDayCount {
        /// The offending day count code.
        code: String,
    },

    /// Business day convention code was not recognized.
    #[error("Unsupported business day convention code: {code}")]
    UnsupportedBusinessDayConvention {
        /// The offending numeric code.
        code: i32,
    },

    /// Date generation rule code was not recognized.
    #[error("Unsupported date generation rule code: {code}")]
    UnsupportedDateGeneration {
        /// The offending numeric code.
        code: i32,
    },

    /// Time unit code was not recognized.
    #[error("Unsupported time unit code: {code}")]
    UnsupportedTimeUnit {
        /// The offending numeric code.
        code: i32,
    },

    /// Swap payer/receiver flag was not recognized.
    #[error("Unsupported payer/receiver flag: {code} (expected 1 or -1)")]
    UnsupportedSwapType {
        /// The offending numeric flag.
        code: i32,
    },
}

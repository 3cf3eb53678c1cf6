//! Error types for curve construction.

use thiserror::Error;

use valmark_core::{Date, ValmarkError};

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A convention code in the curve specification did not resolve.
    #[error(transparent)]
    Convention(#[from] ValmarkError),

    /// The maturity and rate sequences have different lengths.
    ///
    /// The quote strip is three parallel sequences; a length mismatch is a
    /// hard validation failure, not a warning.
    #[error(
        "Curve quote sequences must be of equal length: \
         {values} maturity values, {types} maturity types, {rates} rates"
    )]
    QuoteLengthMismatch {
        /// Length of the maturity value sequence.
        values: usize,
        /// Length of the maturity type sequence.
        types: usize,
        /// Length of the rate sequence.
        rates: usize,
    },

    /// The curve specification carries no deposit quotes.
    #[error("Curve construction requires at least one deposit quote")]
    NoQuotes,

    /// Deposit maturities are not strictly increasing once converted to
    /// dates.
    #[error("Non-monotonic curve pillars at quote {index}: {prev} >= {current}")]
    NonMonotonicPillars {
        /// Index of the offending quote.
        index: usize,
        /// Pillar date of the previous quote.
        prev: Date,
        /// Pillar date of the offending quote.
        current: Date,
    },

    /// A deposit quote produced a non-positive discount factor.
    #[error("Quote {index} (rate {rate}) implies a non-positive discount factor")]
    InvalidQuote {
        /// Index of the offending quote.
        index: usize,
        /// The offending rate.
        rate: f64,
    },
}

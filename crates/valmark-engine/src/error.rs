//! Error types for the valuation engine.

use thiserror::Error;

use valmark_core::ValmarkError;
use valmark_curves::CurveError;
use valmark_swaps::SwapError;

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Error types for single-item valuation.
///
/// Every variant resolves at the item boundary: the batch loop converts
/// it into a failed [`MtmResult`](crate::MtmResult) and moves on.
#[derive(Error, Debug, Clone)]
pub enum PricingError {
    /// A request item could not be decoded.
    #[error("error parsing request item: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },

    /// A convention code did not resolve.
    #[error(transparent)]
    Convention(#[from] ValmarkError),

    /// Discount curve construction failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Schedule generation or index projection failed.
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// The internal net present value check produced a non-finite number.
    #[error("Pricing produced a non-finite net present value")]
    NonFiniteNpv,
}

//! # Valmark Engine
//!
//! The swap valuation engine and the batch processing loop.
//!
//! [`SwapValuationEngine`] turns one (curve, fixings, trade, calculation
//! date) quadruple into one [`MtmResult`]: the future fixed and floating
//! leg cashflows, discount factors, and normalized time fractions a
//! downstream exposure aggregator consumes. Every failure mode is caught
//! at the item boundary and surfaced as a failed result, never a panic or
//! a stream abort.
//!
//! [`BatchValuationService`] applies the engine across inbound request
//! batches, preserving item order and cardinality: a malformed item
//! produces a failed result in its slot, and the outbound batch always
//! has exactly as many items as the inbound one. The calculation date is
//! an explicit parameter threaded through every call, so independent
//! streams can value concurrently; items within one stream are processed
//! strictly serially.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

mod batch;
mod engine;
mod error;
mod result;

pub use batch::{BatchValuationService, ConnectionContext, RequestBundle};
pub use engine::SwapValuationEngine;
pub use error::{PricingError, PricingResult};
pub use result::MtmResult;

//! # Valmark Swaps
//!
//! Leg schedule generation, historical fixings, and floating-rate index
//! projection for vanilla interest-rate swaps.
//!
//! This crate provides:
//!
//! - [`Schedule`]: deterministic period-date generation from trade
//!   parameters (tenor stepping, date generation rules, business day
//!   adjustment, end-of-month handling)
//! - [`FixingSeries`] and [`FixingIndex`]: historical fixing storage with
//!   calendar-validated dates and curve-implied forward projection
//! - [`SwapTradeSpec`]: the wire-level trade definition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::struct_excessive_bools)]

mod error;
mod fixing;
mod schedule;
mod trade;

pub use error::{SwapError, SwapResult};
pub use fixing::{FixingIndex, FixingSeries};
pub use schedule::{Schedule, ScheduleConfig};
pub use trade::{LegSpec, SwapTradeSpec};

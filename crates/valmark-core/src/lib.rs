//! # Valmark Core
//!
//! Core types and conventions for the Valmark swap valuation library.
//!
//! This crate provides the foundational building blocks used throughout
//! Valmark:
//!
//! - **Types**: `Date` and `Tenor` for financial date arithmetic
//! - **Day Count Conventions**: ACT/360 and ACT/365 Fixed year fractions
//! - **Business Day Calendars**: United States and United Kingdom holiday
//!   calendars with business day adjustment conventions
//! - **Convention Resolution**: total mappings from wire codes to calendar,
//!   day count, adjustment, and date generation semantics
//!
//! ## Design Philosophy
//!
//! - **Explicit failure**: unrecognized convention codes are errors, never
//!   silent defaults
//! - **Type Safety**: newtypes prevent mixing incompatible values
//! - **Determinism**: no hidden global state; every computation is a pure
//!   function of its inputs
//!
//! ## Example
//!
//! ```rust
//! use valmark_core::prelude::*;
//!
//! let calendar = resolve::calendar("UnitedStates").unwrap();
//! let date = Date::from_ymd(2020, 7, 3).unwrap();
//!
//! // July 3rd 2020 is the observed Independence Day holiday
//! assert!(calendar.is_holiday(date));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod resolve;
pub mod types;

pub use error::{ValmarkError, ValmarkResult};
pub use types::{Date, Tenor, TimeUnit};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, MarketCalendar, WeekendCalendar,
    };
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{ValmarkError, ValmarkResult};
    pub use crate::resolve;
    pub use crate::types::{Date, DateGenerationRule, SwapType, Tenor, TimeUnit};
}

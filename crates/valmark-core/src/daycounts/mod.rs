//! Day count conventions for accrual and discounting calculations.
//!
//! Day count conventions determine how interest accrues by specifying how
//! to count days between two dates and the year basis to divide by.
//!
//! The swap valuation wire model names two conventions:
//!
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK money markets, GBP legs
//!
//! # Usage
//!
//! ```rust
//! use valmark_core::daycounts::{Act360, DayCount};
//! use valmark_core::Date;
//!
//! let dc = Act360;
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2020, 4, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 91);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ValmarkError, ValmarkResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the day count and year fraction between two
/// dates according to specific market conventions, and must be
/// thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the conventional name of the day count.
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// Negative when `end` precedes `start`.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;
}

/// Enumeration of the supported day count conventions.
///
/// Provides runtime selection from wire codes plus direct delegation to
/// the underlying convention, avoiding boxing on the hot pricing path.
///
/// # Example
///
/// ```rust
/// use valmark_core::daycounts::DayCountConvention;
/// use valmark_core::Date;
///
/// let dcc = DayCountConvention::from_name("Actual360").unwrap();
/// let start = Date::from_ymd(2020, 1, 1).unwrap();
/// let end = Date::from_ymd(2021, 1, 1).unwrap();
/// assert_eq!(dcc.day_count(start, end), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360.
    Act360,
    /// Actual/365 Fixed.
    Act365Fixed,
}

impl DayCountConvention {
    /// Resolves a wire day count code.
    ///
    /// The wire model uses the names `"Actual360"` and `"Actual365Fixed"`.
    /// Unknown codes fail explicitly; there is no default convention.
    pub fn from_name(name: &str) -> ValmarkResult<Self> {
        match name {
            "Actual360" => Ok(DayCountConvention::Act360),
            "Actual365Fixed" => Ok(DayCountConvention::Act365Fixed),
            _ => Err(ValmarkError::UnsupportedDayCount {
                code: name.to_string(),
            }),
        }
    }

    /// Returns the wire name of this convention.
    pub fn wire_name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "Actual360",
            DayCountConvention::Act365Fixed => "Actual365Fixed",
        }
    }

    /// Day count between two dates under this convention.
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act360 => Act360.day_count(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.day_count(start, end),
        }
    }

    /// Year fraction between two dates under this convention.
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
        };
        write!(f, "{name}")
    }
}

//! Actual/360 day count convention.
//!
//! Used primarily for money market instruments and USD floating legs.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// The day count is the actual number of calendar days between dates.
/// The year basis is always 360 days.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }
}

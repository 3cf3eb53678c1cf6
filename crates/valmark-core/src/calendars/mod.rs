//! Business day calendars and conventions.
//!
//! This module provides:
//! - Business day calendars for the markets the wire model names
//! - Business day adjustment conventions
//! - Tenor advancement with end-of-month handling

mod conventions;
mod uk;
mod us;

pub use conventions::BusinessDayConvention;
pub use uk::UnitedKingdomCalendar;
pub use us::UnitedStatesCalendar;

use serde::{Deserialize, Serialize};

use crate::error::ValmarkResult;
use crate::types::{Date, Tenor, TimeUnit};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays for a
/// specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days (sign gives direction).
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let step: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(step);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Advances a date by a tenor, applying the business day convention
    /// and the end-of-month rule.
    ///
    /// For month and year tenors with `end_of_month` set, a date that is
    /// the last day of its month advances to the last day of the target
    /// month before adjustment.
    fn advance(
        &self,
        date: Date,
        tenor: Tenor,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> ValmarkResult<Date> {
        let mut result = tenor.advance(date, 1)?;
        let monthly = matches!(tenor.unit(), TimeUnit::Months | TimeUnit::Years);
        if end_of_month && monthly && date.is_end_of_month() {
            result = result.end_of_month();
        }
        Ok(self.adjust(result, convention))
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// The market calendars resolvable from wire codes.
///
/// A lightweight enum rather than trait objects, so resolved conventions
/// stay `Copy` on the valuation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketCalendar {
    /// Weekends only, no market holidays.
    Weekend,
    /// United States federal holidays.
    UnitedStates,
    /// United Kingdom bank holidays.
    UnitedKingdom,
}

impl Calendar for MarketCalendar {
    fn name(&self) -> &'static str {
        match self {
            MarketCalendar::Weekend => WeekendCalendar.name(),
            MarketCalendar::UnitedStates => UnitedStatesCalendar.name(),
            MarketCalendar::UnitedKingdom => UnitedKingdomCalendar.name(),
        }
    }

    fn is_business_day(&self, date: Date) -> bool {
        match self {
            MarketCalendar::Weekend => WeekendCalendar.is_business_day(date),
            MarketCalendar::UnitedStates => UnitedStatesCalendar.is_business_day(date),
            MarketCalendar::UnitedKingdom => UnitedKingdomCalendar.is_business_day(date),
        }
    }
}

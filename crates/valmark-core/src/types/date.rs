//! Date type for financial calculations.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{ValmarkError, ValmarkResult};

/// Seconds per day, for epoch-second wire conversions.
const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar date without a time component.
///
/// Thin newtype over [`chrono::NaiveDate`] providing the date arithmetic
/// needed for schedule generation and day counting, plus conversions to and
/// from the epoch-second representation used on the wire.
///
/// # Example
///
/// ```rust
/// use valmark_core::Date;
///
/// let date = Date::from_ymd(2020, 6, 15).unwrap();
/// assert_eq!(date.year(), 2020);
///
/// let parsed: Date = Date::parse("2020-06-15").unwrap();
/// assert_eq!(date, parsed);
///
/// // Wire dates are midnight-UTC epoch seconds
/// let roundtrip = Date::from_timestamp(date.timestamp()).unwrap();
/// assert_eq!(date, roundtrip);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month (1-12), and day (1-31) components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ValmarkResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| ValmarkError::InvalidDate {
                message: format!("{year:04}-{month:02}-{day:02} is not a valid date"),
            })
    }

    /// Parses a date from an ISO 8601 string (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> ValmarkResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| ValmarkError::InvalidDate {
                message: format!("cannot parse {s:?}: {e}"),
            })
    }

    /// Converts midnight-UTC epoch seconds to a date.
    ///
    /// The wire format carries trade and fixing dates as epoch seconds;
    /// any intra-day remainder is discarded.
    pub fn from_timestamp(seconds: i64) -> ValmarkResult<Self> {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        NaiveDate::default()
            .checked_add_signed(chrono::Duration::days(days))
            .map(Date)
            .ok_or_else(|| ValmarkError::InvalidDate {
                message: format!("epoch seconds {seconds} out of representable range"),
            })
    }

    /// Returns this date as midnight-UTC epoch seconds.
    pub fn timestamp(&self) -> i64 {
        (self.0 - NaiveDate::default()).num_days() * SECONDS_PER_DAY
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true if the date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adds (or subtracts) a number of calendar days.
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds (or subtracts) a number of calendar months, clamping the day
    /// of month to the target month's length (Jan 31 + 1M = Feb 28/29).
    pub fn add_months(&self, months: i32) -> ValmarkResult<Self> {
        let result = if months >= 0 {
            self.0.checked_add_months(chrono::Months::new(months as u32))
        } else {
            self.0.checked_sub_months(chrono::Months::new((-months) as u32))
        };
        result.map(Date).ok_or_else(|| ValmarkError::InvalidDate {
            message: format!("{self} + {months} months out of range"),
        })
    }

    /// Adds (or subtracts) a number of calendar years.
    pub fn add_years(&self, years: i32) -> ValmarkResult<Self> {
        self.add_months(years.checked_mul(12).ok_or_else(|| {
            ValmarkError::InvalidDate {
                message: format!("{years} years out of range"),
            }
        })?)
    }

    /// Returns the number of calendar days from `self` to `other`
    /// (positive if `other` is later).
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        let (next_y, next_m) = if self.0.month() == 12 {
            (self.0.year() + 1, 1)
        } else {
            (self.0.year(), self.0.month() + 1)
        };
        // First of next month always exists for a valid date.
        NaiveDate::from_ymd_opt(next_y, next_m, 1)
            .map_or(31, |d| d.pred_opt().map_or(31, |p| p.day()))
    }

    /// Returns the last day of this date's month.
    pub fn end_of_month(&self) -> Self {
        let day = self.days_in_month();
        NaiveDate::from_ymd_opt(self.0.year(), self.0.month(), day)
            .map(Date)
            .unwrap_or(*self)
    }

    /// Returns true if this is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.0.day() == self.days_in_month()
    }

    /// Returns the nth occurrence (1-based) of a weekday in this date's
    /// month, e.g. the third Wednesday.
    pub fn nth_weekday_of_month(&self, weekday: Weekday, nth: u32) -> ValmarkResult<Self> {
        let first = NaiveDate::from_ymd_opt(self.0.year(), self.0.month(), 1).ok_or_else(|| {
            ValmarkError::InvalidDate {
                message: format!("no first day for {self}"),
            }
        })?;
        let offset = (7 + weekday.num_days_from_monday() as i64
            - first.weekday().num_days_from_monday() as i64)
            % 7;
        let day = 1 + offset + 7 * (nth as i64 - 1);
        if day > self.days_in_month() as i64 {
            return Err(ValmarkError::InvalidDate {
                message: format!(
                    "no {nth}th {weekday:?} in {:04}-{:02}",
                    self.0.year(),
                    self.0.month()
                ),
            });
        }
        Ok(Date(first + chrono::Duration::days(day - 1)))
    }

    /// Returns the underlying [`chrono::NaiveDate`].
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Add<i64> for Date {
    type Output = Date;

    fn add(self, days: i64) -> Date {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Date;

    fn sub(self, days: i64) -> Date {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    fn sub(self, other: Date) -> i64 {
        other.days_between(&self)
    }
}

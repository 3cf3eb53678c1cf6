//! Tenor (period) type for schedule and curve maturity arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValmarkError, ValmarkResult};
use crate::types::Date;

/// Calendar unit of a tenor.
///
/// Wire code values follow the original feed's numbering and must stay
/// stable: 0 = Days, 1 = Weeks, 2 = Months, 3 = Years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl TimeUnit {
    /// Resolves a wire code to a time unit.
    ///
    /// Unknown codes fail explicitly; there is no default unit.
    pub fn from_code(code: i32) -> ValmarkResult<Self> {
        match code {
            0 => Ok(TimeUnit::Days),
            1 => Ok(TimeUnit::Weeks),
            2 => Ok(TimeUnit::Months),
            3 => Ok(TimeUnit::Years),
            _ => Err(ValmarkError::UnsupportedTimeUnit { code }),
        }
    }

    /// Returns the wire code for this unit.
    pub fn code(&self) -> i32 {
        match self {
            TimeUnit::Days => 0,
            TimeUnit::Weeks => 1,
            TimeUnit::Months => 2,
            TimeUnit::Years => 3,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{suffix}")
    }
}

/// A tenor: a length together with a calendar unit, e.g. `3M` or `1Y`.
///
/// # Example
///
/// ```rust
/// use valmark_core::{Date, Tenor, TimeUnit};
///
/// let tenor = Tenor::new(3, TimeUnit::Months);
/// let start = Date::from_ymd(2020, 1, 15).unwrap();
/// assert_eq!(
///     tenor.advance(start, 1).unwrap(),
///     Date::from_ymd(2020, 4, 15).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    /// Number of units.
    length: i32,
    /// Calendar unit.
    unit: TimeUnit,
}

impl Tenor {
    /// Creates a tenor from a length and unit.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Creates a tenor from wire fields (length plus unit code).
    pub fn from_codes(length: i32, unit_code: i32) -> ValmarkResult<Self> {
        Ok(Self::new(length, TimeUnit::from_code(unit_code)?))
    }

    /// Returns the tenor length.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Returns the tenor unit.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Advances `date` by `steps` multiples of this tenor (steps may be
    /// negative).
    ///
    /// Stepping is always computed as a single multiplied offset from
    /// `date`, never iteratively, so month-end clamping cannot drift.
    pub fn advance(&self, date: Date, steps: i32) -> ValmarkResult<Date> {
        let n = self.length.checked_mul(steps).ok_or_else(|| {
            ValmarkError::InvalidDate {
                message: format!("tenor step {steps} x {self} overflows"),
            }
        })?;
        match self.unit {
            TimeUnit::Days => Ok(date.add_days(i64::from(n))),
            TimeUnit::Weeks => Ok(date.add_days(7 * i64::from(n))),
            TimeUnit::Months => date.add_months(n),
            TimeUnit::Years => date.add_years(n),
        }
    }

}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_unit_codes() {
        for code in 0..4 {
            let unit = TimeUnit::from_code(code).unwrap();
            assert_eq!(unit.code(), code);
        }
        assert!(matches!(
            TimeUnit::from_code(7),
            Err(ValmarkError::UnsupportedTimeUnit { code: 7 })
        ));
    }

    #[test]
    fn test_advance_months() {
        let tenor = Tenor::new(3, TimeUnit::Months);
        let date = Date::from_ymd(2020, 1, 31).unwrap();
        // Single multiplied step: Jan 31 + 6M = Jul 31, no Feb clamping drift
        assert_eq!(
            tenor.advance(date, 2).unwrap(),
            Date::from_ymd(2020, 7, 31).unwrap()
        );
        assert_eq!(
            tenor.advance(date, -1).unwrap(),
            Date::from_ymd(2019, 10, 31).unwrap()
        );
    }

    #[test]
    fn test_advance_weeks_and_days() {
        let start = Date::from_ymd(2020, 3, 2).unwrap();
        assert_eq!(
            Tenor::new(2, TimeUnit::Weeks).advance(start, 1).unwrap(),
            Date::from_ymd(2020, 3, 16).unwrap()
        );
        assert_eq!(
            Tenor::new(10, TimeUnit::Days).advance(start, -1).unwrap(),
            Date::from_ymd(2020, 2, 21).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Tenor::new(3, TimeUnit::Months).to_string(), "3M");
        assert_eq!(Tenor::new(1, TimeUnit::Years).to_string(), "1Y");
    }
}

//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::{ValmarkError, ValmarkResult};
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls on a
/// non-business day. Wire codes preserve the original feed's numbering:
/// 0 = Following, 1 = ModifiedFollowing, 2 = Preceding,
/// 3 = ModifiedPreceding, 4 = Unadjusted, 5 = HalfMonthModifiedFollowing,
/// 6 = Nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month
    /// boundary, in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month
    /// boundary, in which case move to the following business day.
    ModifiedPreceding,

    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// As ModifiedFollowing, additionally not crossing the mid-month
    /// boundary (the 15th).
    HalfMonthModifiedFollowing,

    /// Move to the nearest business day; ties resolve to the following.
    Nearest,
}

impl BusinessDayConvention {
    /// Resolves a wire code to a business day convention.
    ///
    /// Unknown codes fail explicitly; there is no default convention.
    pub fn from_code(code: i32) -> ValmarkResult<Self> {
        match code {
            0 => Ok(BusinessDayConvention::Following),
            1 => Ok(BusinessDayConvention::ModifiedFollowing),
            2 => Ok(BusinessDayConvention::Preceding),
            3 => Ok(BusinessDayConvention::ModifiedPreceding),
            4 => Ok(BusinessDayConvention::Unadjusted),
            5 => Ok(BusinessDayConvention::HalfMonthModifiedFollowing),
            6 => Ok(BusinessDayConvention::Nearest),
            _ => Err(ValmarkError::UnsupportedBusinessDayConvention { code }),
        }
    }

    /// Returns the wire code for this convention.
    pub fn code(&self) -> i32 {
        match self {
            BusinessDayConvention::Following => 0,
            BusinessDayConvention::ModifiedFollowing => 1,
            BusinessDayConvention::Preceding => 2,
            BusinessDayConvention::ModifiedPreceding => 3,
            BusinessDayConvention::Unadjusted => 4,
            BusinessDayConvention::HalfMonthModifiedFollowing => 5,
            BusinessDayConvention::Nearest => 6,
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::HalfMonthModifiedFollowing => {
                "Half-Month Modified Following"
            }
            BusinessDayConvention::Nearest => "Nearest",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.month() != date.month() {
                preceding(date, calendar)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar);
            if adjusted.month() != date.month() {
                following(date, calendar)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::HalfMonthModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.month() != date.month()
                || (date.day() <= 15 && adjusted.day() > 15)
            {
                preceding(date, calendar)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Nearest => {
            let fwd = following(date, calendar);
            let back = preceding(date, calendar);

            let fwd_days = date.days_between(&fwd);
            let back_days = back.days_between(&date);

            if fwd_days <= back_days {
                fwd
            } else {
                back
            }
        }
    }
}

/// Returns the next business day on or after the given date.
fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

/// Returns the previous business day on or before the given date.
fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendCalendar;

    fn saturday() -> Date {
        // Saturday May 30, 2020 - last weekend of the month
        Date::from_ymd(2020, 5, 30).unwrap()
    }

    #[test]
    fn test_from_code_roundtrip() {
        for code in 0..7 {
            let conv = BusinessDayConvention::from_code(code).unwrap();
            assert_eq!(conv.code(), code);
        }
        assert!(BusinessDayConvention::from_code(7).is_err());
    }

    #[test]
    fn test_following_crosses_month() {
        let cal = WeekendCalendar;
        let adjusted = adjust(saturday(), BusinessDayConvention::Following, &cal);
        assert_eq!(adjusted, Date::from_ymd(2020, 6, 1).unwrap());
    }

    #[test]
    fn test_modified_following_stays_in_month() {
        let cal = WeekendCalendar;
        let adjusted = adjust(saturday(), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, Date::from_ymd(2020, 5, 29).unwrap());
    }

    #[test]
    fn test_unadjusted() {
        let cal = WeekendCalendar;
        assert_eq!(adjust(saturday(), BusinessDayConvention::Unadjusted, &cal), saturday());
    }

    #[test]
    fn test_half_month_modified_following() {
        let cal = WeekendCalendar;
        // Saturday Aug 14, 2021: following lands on the 16th, crossing
        // the mid-month boundary, so the adjustment rolls back.
        let date = Date::from_ymd(2021, 8, 14).unwrap();
        let adjusted = adjust(
            date,
            BusinessDayConvention::HalfMonthModifiedFollowing,
            &cal,
        );
        assert_eq!(adjusted, Date::from_ymd(2021, 8, 13).unwrap());
    }

    #[test]
    fn test_nearest_prefers_following_on_tie() {
        let cal = WeekendCalendar;
        // Saturday: preceding is 1 day back, following 2 days forward
        let adjusted = adjust(saturday(), BusinessDayConvention::Nearest, &cal);
        assert_eq!(adjusted, Date::from_ymd(2020, 5, 29).unwrap());
        // Sunday: following is closer
        let sunday = saturday().add_days(1);
        let adjusted = adjust(sunday, BusinessDayConvention::Nearest, &cal);
        assert_eq!(adjusted, Date::from_ymd(2020, 6, 1).unwrap());
    }
}

//! United Kingdom bank holiday calendar.

use chrono::Weekday;

use super::Calendar;
use crate::types::Date;

/// United Kingdom bank holiday calendar (England and Wales).
///
/// ## Holidays
///
/// - New Year's Day (January 1, substitute Monday if weekend)
/// - Good Friday
/// - Easter Monday
/// - Early May Bank Holiday (1st Monday in May; moved to May 8 in 2020)
/// - Spring Bank Holiday (last Monday in May, with jubilee moves)
/// - Summer Bank Holiday (last Monday in August)
/// - Christmas Day and Boxing Day (with substitute days)
///
/// One-off holidays for royal events are included for the years where
/// they are known.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdomCalendar;

impl UnitedKingdomCalendar {
    fn is_bank_holiday(self, date: Date) -> bool {
        let year = date.year();
        let month = date.month();
        let day = date.day();
        let weekday = date.weekday();

        // New Year's Day (substitute Monday when Jan 1 is a weekend)
        if month == 1 && (day == 1 || ((day == 2 || day == 3) && weekday == Weekday::Mon)) {
            return true;
        }

        // Easter-based holidays
        if let Ok(easter) = easter_sunday(year) {
            if date == easter.add_days(-2) || date == easter.add_days(1) {
                return true;
            }
        }

        // Early May Bank Holiday: 1st Monday in May
        // (replaced by VE Day, Friday May 8, in 2020)
        if year == 2020 {
            if month == 5 && day == 8 {
                return true;
            }
        } else if month == 5 && weekday == Weekday::Mon && day <= 7 {
            return true;
        }

        // Spring Bank Holiday: last Monday in May, with jubilee moves
        match year {
            2002 => {
                // Golden Jubilee: June 3-4
                if month == 6 && (day == 3 || day == 4) {
                    return true;
                }
            }
            2012 => {
                // Diamond Jubilee: June 4-5
                if month == 6 && (day == 4 || day == 5) {
                    return true;
                }
            }
            2022 => {
                // Platinum Jubilee: June 2-3
                if month == 6 && (day == 2 || day == 3) {
                    return true;
                }
            }
            _ => {
                if month == 5 && weekday == Weekday::Mon && day + 7 > date.days_in_month() {
                    return true;
                }
            }
        }

        // Summer Bank Holiday: last Monday in August
        if month == 8 && weekday == Weekday::Mon && day + 7 > date.days_in_month() {
            return true;
        }

        // Christmas Day (substitute when Dec 25 is a weekend)
        if month == 12
            && (day == 25
                || (day == 27 && matches!(weekday, Weekday::Mon | Weekday::Tue)))
        {
            return true;
        }

        // Boxing Day (substitute when Dec 26 is a weekend)
        if month == 12
            && (day == 26
                || (day == 28 && matches!(weekday, Weekday::Mon | Weekday::Tue)))
        {
            return true;
        }

        // One-off holidays
        matches!(
            (year, month, day),
            (2011, 4, 29)   // Royal wedding
                | (2023, 5, 8)  // Coronation of King Charles III
                | (1999, 12, 31) // Millennium eve
        )
    }
}

impl Calendar for UnitedKingdomCalendar {
    fn name(&self) -> &'static str {
        "United Kingdom"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_bank_holiday(date)
    }
}

/// Calculates Easter Sunday using the Anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
fn easter_sunday(year: i32) -> Result<Date, crate::error::ValmarkError> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(y: i32, m: u32, d: u32) -> bool {
        UnitedKingdomCalendar.is_holiday(Date::from_ymd(y, m, d).unwrap())
    }

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2016).unwrap(), Date::from_ymd(2016, 3, 27).unwrap());
        assert_eq!(easter_sunday(2025).unwrap(), Date::from_ymd(2025, 4, 20).unwrap());
    }

    #[test]
    fn test_easter_holidays() {
        assert!(holiday(2016, 3, 25)); // Good Friday 2016
        assert!(holiday(2016, 3, 28)); // Easter Monday 2016
        assert!(!holiday(2016, 3, 29));
    }

    #[test]
    fn test_may_holidays() {
        assert!(holiday(2016, 5, 2)); // Early May
        assert!(holiday(2016, 5, 30)); // Spring
        assert!(holiday(2020, 5, 8)); // VE Day move
        assert!(!holiday(2020, 5, 4)); // regular slot vacated in 2020
        assert!(holiday(2022, 6, 2)); // Platinum Jubilee
        assert!(holiday(2022, 6, 3));
        assert!(!holiday(2022, 5, 30)); // spring slot vacated in 2022
    }

    #[test]
    fn test_christmas_substitutes() {
        assert!(holiday(2021, 12, 27)); // Dec 25, 2021 was Saturday
        assert!(holiday(2021, 12, 28)); // Dec 26, 2021 was Sunday
        assert!(holiday(2019, 12, 25));
        assert!(holiday(2019, 12, 26));
        assert!(!holiday(2019, 12, 27));
    }

    #[test]
    fn test_new_year_substitute() {
        assert!(holiday(2022, 1, 3)); // Jan 1, 2022 was Saturday
        assert!(holiday(2017, 1, 2)); // Jan 1, 2017 was Sunday
    }

    #[test]
    fn test_regular_business_day() {
        assert!(UnitedKingdomCalendar.is_business_day(Date::from_ymd(2016, 1, 7).unwrap()));
    }
}

//! United States federal holiday calendar.

use chrono::Weekday;

use super::Calendar;
use crate::types::Date;

/// United States federal holiday calendar.
///
/// Covers the federal holidays observed by the USD rates market:
///
/// - New Year's Day (January 1, or nearest weekday)
/// - Martin Luther King Jr. Day (3rd Monday in January)
/// - Presidents Day (3rd Monday in February)
/// - Memorial Day (last Monday in May)
/// - Juneteenth (June 19, or nearest weekday, since 2021)
/// - Independence Day (July 4, or nearest weekday)
/// - Labor Day (1st Monday in September)
/// - Columbus Day (2nd Monday in October)
/// - Veterans Day (November 11, or nearest weekday)
/// - Thanksgiving (4th Thursday in November)
/// - Christmas Day (December 25, or nearest weekday)
///
/// Saturday holidays are observed the preceding Friday, Sunday holidays
/// the following Monday.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesCalendar;

impl UnitedStatesCalendar {
    fn is_federal_holiday(self, date: Date) -> bool {
        let year = date.year();
        let month = date.month();
        let day = date.day();
        let weekday = date.weekday();

        // Fixed-date holidays with weekend observation
        match (month, day) {
            // New Year's Day
            (1, 1) => return true,
            (12, 31) if weekday == Weekday::Fri => return true,
            (1, 2) if weekday == Weekday::Mon => return true,

            // Juneteenth - since 2021
            (6, 19) if year >= 2021 => return true,
            (6, 18) if year >= 2021 && weekday == Weekday::Fri => return true,
            (6, 20) if year >= 2021 && weekday == Weekday::Mon => return true,

            // Independence Day
            (7, 4) => return true,
            (7, 3) if weekday == Weekday::Fri => return true,
            (7, 5) if weekday == Weekday::Mon => return true,

            // Veterans Day
            (11, 11) => return true,
            (11, 10) if weekday == Weekday::Fri => return true,
            (11, 12) if weekday == Weekday::Mon => return true,

            // Christmas Day
            (12, 25) => return true,
            (12, 24) if weekday == Weekday::Fri => return true,
            (12, 26) if weekday == Weekday::Mon => return true,

            _ => {}
        }

        // Floating holidays (nth weekday of month)

        // MLK Day: 3rd Monday in January
        if month == 1 && is_nth_weekday(date, Weekday::Mon, 3) {
            return true;
        }

        // Presidents Day: 3rd Monday in February
        if month == 2 && is_nth_weekday(date, Weekday::Mon, 3) {
            return true;
        }

        // Memorial Day: last Monday in May
        if month == 5 && is_last_weekday(date, Weekday::Mon) {
            return true;
        }

        // Labor Day: 1st Monday in September
        if month == 9 && is_nth_weekday(date, Weekday::Mon, 1) {
            return true;
        }

        // Columbus Day: 2nd Monday in October
        if month == 10 && is_nth_weekday(date, Weekday::Mon, 2) {
            return true;
        }

        // Thanksgiving: 4th Thursday in November
        if month == 11 && is_nth_weekday(date, Weekday::Thu, 4) {
            return true;
        }

        false
    }
}

impl Calendar for UnitedStatesCalendar {
    fn name(&self) -> &'static str {
        "United States"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_federal_holiday(date)
    }
}

/// Returns true if `date` is the nth occurrence of `weekday` in its month.
fn is_nth_weekday(date: Date, weekday: Weekday, nth: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == nth
}

/// Returns true if `date` is the last occurrence of `weekday` in its month.
fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.day() + 7 > date.days_in_month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(y: i32, m: u32, d: u32) -> bool {
        UnitedStatesCalendar.is_holiday(Date::from_ymd(y, m, d).unwrap())
    }

    #[test]
    fn test_fixed_holidays() {
        assert!(holiday(2020, 1, 1)); // New Year
        assert!(holiday(2016, 7, 4)); // Independence Day (Monday)
        assert!(holiday(2020, 12, 25)); // Christmas (Friday)
    }

    #[test]
    fn test_observed_holidays() {
        // July 4, 2020 was a Saturday: observed Friday July 3
        assert!(holiday(2020, 7, 3));
        // July 4, 2021 was a Sunday: observed Monday July 5
        assert!(holiday(2021, 7, 5));
        // December 31, 2021 was a Friday: New Year 2022 observed
        assert!(holiday(2021, 12, 31));
    }

    #[test]
    fn test_floating_holidays() {
        assert!(holiday(2016, 1, 18)); // MLK Day 2016
        assert!(holiday(2016, 5, 30)); // Memorial Day 2016
        assert!(holiday(2016, 9, 5)); // Labor Day 2016
        assert!(holiday(2016, 11, 24)); // Thanksgiving 2016
    }

    #[test]
    fn test_juneteenth_cutover() {
        assert!(holiday(2022, 6, 20)); // June 19, 2022 was Sunday
        assert!(!holiday(2019, 6, 19)); // not a holiday before 2021
    }

    #[test]
    fn test_regular_business_days() {
        let cal = UnitedStatesCalendar;
        assert!(cal.is_business_day(Date::from_ymd(2016, 1, 7).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2020, 6, 15).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2020, 6, 13).unwrap())); // Saturday
    }
}

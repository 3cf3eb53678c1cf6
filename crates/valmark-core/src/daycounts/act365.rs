//! Actual/365 Fixed day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of calendar days between dates.
/// The year basis is always 365 days, including in leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_act365_half_year() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2021, 1, 1).unwrap();
        let end = Date::from_ymd(2021, 7, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 181);
        assert_eq!(dc.year_fraction(start, end), dec!(181) / dec!(365));
    }

    #[test]
    fn test_act365_leap_year_basis_fixed() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2020, 1, 1).unwrap();
        let end = Date::from_ymd(2021, 1, 1).unwrap();

        // 366 actual days over a fixed 365 basis
        assert_eq!(dc.day_count(start, end), 366);
        assert!(dc.year_fraction(start, end) > Decimal::ONE);
    }
}

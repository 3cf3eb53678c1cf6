//! Convention resolution from wire codes.
//!
//! The request feed identifies calendars and day counts by string code and
//! adjustment conventions, date generation rules, time units, and swap
//! direction by integer code. This module maps every code to its semantic
//! counterpart as a total function: an unrecognized code is an explicit
//! [`ValmarkError`], never a silent default.
//!
//! # Example
//!
//! ```rust
//! use valmark_core::resolve;
//!
//! assert!(resolve::calendar("UnitedKingdom").is_ok());
//! assert!(resolve::calendar("Mars").is_err());
//! ```

use crate::calendars::{BusinessDayConvention, MarketCalendar};
use crate::daycounts::DayCountConvention;
use crate::error::{ValmarkError, ValmarkResult};
use crate::types::{DateGenerationRule, SwapType, Tenor, TimeUnit};

/// Resolves a calendar string code.
pub fn calendar(code: &str) -> ValmarkResult<MarketCalendar> {
    match code {
        "UnitedStates" => Ok(MarketCalendar::UnitedStates),
        "UnitedKingdom" => Ok(MarketCalendar::UnitedKingdom),
        _ => Err(ValmarkError::UnsupportedCalendar {
            code: code.to_string(),
        }),
    }
}

/// Resolves a day count string code (`"Actual360"`, `"Actual365Fixed"`).
pub fn day_count(code: &str) -> ValmarkResult<DayCountConvention> {
    DayCountConvention::from_name(code)
}

/// Resolves a business day convention integer code.
pub fn business_day_convention(code: i32) -> ValmarkResult<BusinessDayConvention> {
    BusinessDayConvention::from_code(code)
}

/// Resolves a date generation rule integer code.
pub fn date_generation(code: i32) -> ValmarkResult<DateGenerationRule> {
    DateGenerationRule::from_code(code)
}

/// Resolves a time unit integer code.
pub fn time_unit(code: i32) -> ValmarkResult<TimeUnit> {
    TimeUnit::from_code(code)
}

/// Resolves a tenor from wire length and unit-code fields.
pub fn tenor(length: i32, unit_code: i32) -> ValmarkResult<Tenor> {
    Tenor::from_codes(length, unit_code)
}

/// Resolves a payer/receiver flag.
pub fn swap_type(code: i32) -> ValmarkResult<SwapType> {
    SwapType::from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_calendars() {
        assert_eq!(calendar("UnitedStates").unwrap(), MarketCalendar::UnitedStates);
        assert_eq!(calendar("UnitedKingdom").unwrap(), MarketCalendar::UnitedKingdom);
    }

    #[test]
    fn test_unknown_calendar_is_explicit_error() {
        let err = calendar("Mars").unwrap_err();
        assert_eq!(
            err,
            ValmarkError::UnsupportedCalendar {
                code: "Mars".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_codes_rejected_everywhere() {
        assert!(day_count("Actual252").is_err());
        assert!(business_day_convention(99).is_err());
        assert!(date_generation(99).is_err());
        assert!(time_unit(99).is_err());
        assert!(swap_type(2).is_err());
    }

    #[test]
    fn test_tenor_resolution() {
        let t = tenor(3, 2).unwrap();
        assert_eq!(t.to_string(), "3M");
        assert!(tenor(3, 9).is_err());
    }
}

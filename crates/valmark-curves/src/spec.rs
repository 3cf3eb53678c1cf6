//! Wire-level curve specification.

use serde::{Deserialize, Serialize};

use valmark_core::prelude::*;

use crate::error::{CurveError, CurveResult};

/// A discount curve specification as carried on the wire.
///
/// Field names (including the `bussiness_convention` spelling) are fixed by
/// the upstream feed and must not change. Missing fields decode to their
/// zero values, matching proto3 JSON semantics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSpec {
    /// Curve identifier, echoed into every valuation result.
    pub curvename: String,
    /// Floating index tenor length (e.g. 3 for a 3M index).
    pub index_frequency: i32,
    /// Floating index tenor unit code.
    pub index_frequency_type: i32,
    /// Calendar string code.
    pub calendar: String,
    /// Business day convention code applied to deposit maturities.
    #[serde(rename = "bussiness_convention")]
    pub business_convention: i32,
    /// Day count string code.
    pub dcc: String,
    /// End-of-month rule for deposit maturity rolls.
    pub end_of_month_flag: bool,
    /// Business days from the calculation date to the deposits' spot date.
    pub settlement_days: i32,
    /// Deposit maturity lengths, parallel to `maturity_period_type` and
    /// `rates`.
    pub maturity_period_value: Vec<i32>,
    /// Deposit maturity unit codes.
    pub maturity_period_type: Vec<i32>,
    /// Simple deposit rates.
    pub rates: Vec<f64>,
}

impl CurveSpec {
    /// Validates the parallel quote sequences.
    ///
    /// The three sequences must be non-empty and of equal length.
    pub fn validate(&self) -> CurveResult<()> {
        let values = self.maturity_period_value.len();
        let types = self.maturity_period_type.len();
        let rates = self.rates.len();

        if values != types || values != rates {
            return Err(CurveError::QuoteLengthMismatch {
                values,
                types,
                rates,
            });
        }
        if values == 0 {
            return Err(CurveError::NoQuotes);
        }
        Ok(())
    }

    /// Resolves the floating index tenor from the wire fields.
    pub fn index_tenor(&self) -> ValmarkResult<Tenor> {
        resolve::tenor(self.index_frequency, self.index_frequency_type)
    }

    /// Resolves the calendar code.
    pub fn resolve_calendar(&self) -> ValmarkResult<MarketCalendar> {
        resolve::calendar(&self.calendar)
    }

    /// Resolves the day count code.
    pub fn resolve_day_count(&self) -> ValmarkResult<DayCountConvention> {
        resolve::day_count(&self.dcc)
    }

    /// Resolves the business day convention code.
    pub fn resolve_convention(&self) -> ValmarkResult<BusinessDayConvention> {
        resolve::business_day_convention(self.business_convention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurveSpec {
        CurveSpec {
            curvename: "USD-3M".to_string(),
            index_frequency: 3,
            index_frequency_type: 2,
            calendar: "UnitedStates".to_string(),
            business_convention: 1,
            dcc: "Actual360".to_string(),
            end_of_month_flag: false,
            settlement_days: 2,
            maturity_period_value: vec![3, 6],
            maturity_period_type: vec![2, 2],
            rates: vec![0.02, 0.022],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let mut spec = sample();
        spec.rates.pop();
        assert!(matches!(
            spec.validate(),
            Err(CurveError::QuoteLengthMismatch {
                values: 2,
                types: 2,
                rates: 1
            })
        ));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let mut spec = sample();
        spec.maturity_period_value.clear();
        spec.maturity_period_type.clear();
        spec.rates.clear();
        assert!(matches!(spec.validate(), Err(CurveError::NoQuotes)));
    }

    #[test]
    fn test_wire_spelling_preserved() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"bussiness_convention\""));

        let decoded: CurveSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_missing_fields_default() {
        let decoded: CurveSpec =
            serde_json::from_str(r#"{"curvename":"X","rates":[0.01]}"#).unwrap();
        assert_eq!(decoded.curvename, "X");
        assert_eq!(decoded.settlement_days, 0);
        assert!(decoded.maturity_period_value.is_empty());
    }

    #[test]
    fn test_resolution_helpers() {
        let spec = sample();
        assert_eq!(spec.index_tenor().unwrap().to_string(), "3M");
        assert!(spec.resolve_calendar().is_ok());
        assert!(spec.resolve_day_count().is_ok());
        assert!(spec.resolve_convention().is_ok());

        let mut bad = spec;
        bad.calendar = "Mars".to_string();
        assert!(bad.resolve_calendar().is_err());
    }
}

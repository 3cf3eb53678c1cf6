//! Historical fixings and floating-rate index projection.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use valmark_core::prelude::*;
use valmark_curves::DiscountCurve;

use crate::error::{SwapError, SwapResult};

/// A series of historical fixings for one floating index, as carried on
/// the wire.
///
/// Dates are midnight-UTC epoch seconds; missing fields decode to their
/// zero values, matching proto3 JSON semantics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixingSeries {
    /// Name of the curve/index the fixings belong to.
    pub curvename: String,
    /// Fixing dates as epoch seconds.
    pub fixing_dates: Vec<i64>,
    /// Observed rates, parallel to `fixing_dates`.
    pub fixing_rates: Vec<f64>,
}

impl FixingSeries {
    /// Validates the parallel fixing sequences.
    pub fn validate(&self) -> SwapResult<()> {
        if self.fixing_dates.len() != self.fixing_rates.len() {
            return Err(SwapError::FixingLengthMismatch {
                dates: self.fixing_dates.len(),
                rates: self.fixing_rates.len(),
            });
        }
        Ok(())
    }
}

/// A floating-rate index: name, tenor, fixing calendar, and the loaded
/// fixing history.
///
/// `rate_for` answers the index rate observed (or projected) on a date:
/// historical fixings win on valid fixing dates, and everything else is
/// forward-projected off the supplied discount curve over one index tenor.
#[derive(Debug, Clone)]
pub struct FixingIndex {
    /// Index name (e.g. `USDLibor`).
    name: String,
    /// Underlying deposit tenor of the index.
    tenor: Tenor,
    /// Fixing calendar.
    calendar: MarketCalendar,
    /// Day count for forward rate conversion.
    day_count: DayCountConvention,
    /// Historical fixings on valid fixing dates.
    fixings: BTreeMap<Date, f64>,
}

impl FixingIndex {
    /// Resolves a named index.
    ///
    /// The wire model names `USDLibor` and `GBPLibor`; unknown names fail
    /// explicitly. The index tenor comes from the curve specification and
    /// the fixing calendar from the resolved curve calendar.
    pub fn from_name(
        name: &str,
        tenor: Tenor,
        calendar: MarketCalendar,
    ) -> SwapResult<Self> {
        let day_count = match name {
            "USDLibor" => DayCountConvention::Act360,
            "GBPLibor" => DayCountConvention::Act365Fixed,
            _ => {
                return Err(SwapError::UnknownIndex {
                    name: name.to_string(),
                })
            }
        };
        Ok(Self {
            name: name.to_string(),
            tenor,
            calendar,
            day_count,
            fixings: BTreeMap::new(),
        })
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the index tenor.
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Returns true if the date is a valid fixing date for the index's
    /// calendar.
    pub fn is_valid_fixing_date(&self, date: Date) -> bool {
        self.calendar.is_business_day(date)
    }

    /// Loads a fixing series into the index.
    ///
    /// Fixings dated on non-business days are silently dropped: they are
    /// not applied and not reported as an error.
    pub fn add_fixings(&mut self, series: &FixingSeries) -> SwapResult<()> {
        series.validate()?;
        for (&seconds, &rate) in series.fixing_dates.iter().zip(&series.fixing_rates) {
            let date = Date::from_timestamp(seconds)?;
            if self.is_valid_fixing_date(date) {
                self.fixings.insert(date, rate);
            } else {
                debug!(index = %self.name, %date, "dropping fixing on non-business day");
            }
        }
        Ok(())
    }

    /// Returns the historical fixing for a date, if one was loaded.
    pub fn historical_fixing(&self, date: Date) -> Option<f64> {
        self.fixings.get(&date).copied()
    }

    /// Returns the index rate for a date: the historical fixing when the
    /// date is a valid fixing date with a loaded observation, otherwise
    /// the simple forward rate implied by `curve` over one index tenor.
    pub fn rate_for(&self, date: Date, curve: &DiscountCurve) -> SwapResult<f64> {
        if self.is_valid_fixing_date(date) {
            if let Some(rate) = self.fixings.get(&date) {
                return Ok(*rate);
            }
        }
        self.forward_rate(date, curve)
    }

    /// Simple-compounded forward rate over one index tenor starting at
    /// `date`.
    fn forward_rate(&self, date: Date, curve: &DiscountCurve) -> SwapResult<f64> {
        let end = self.calendar.advance(
            date,
            self.tenor,
            BusinessDayConvention::ModifiedFollowing,
            false,
        )?;
        let tau = self
            .day_count
            .year_fraction(date, end)
            .to_f64()
            .unwrap_or(0.0);
        if tau <= 0.0 {
            return Err(SwapError::DegenerateForward { start: date, end });
        }
        let forward_df = curve.forward_discount_factor(date, end);
        if forward_df <= 0.0 {
            return Err(SwapError::DegenerateForward { start: date, end });
        }
        Ok((1.0 / forward_df - 1.0) / tau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use valmark_curves::{CurveSpec, DiscountCurveBuilder};

    fn index() -> FixingIndex {
        FixingIndex::from_name(
            "USDLibor",
            Tenor::new(3, TimeUnit::Months),
            MarketCalendar::UnitedStates,
        )
        .unwrap()
    }

    fn flat_curve(calc: Date) -> DiscountCurve {
        let spec = CurveSpec {
            curvename: "USD-3M".to_string(),
            index_frequency: 3,
            index_frequency_type: 2,
            calendar: "UnitedStates".to_string(),
            business_convention: 1,
            dcc: "Actual360".to_string(),
            end_of_month_flag: false,
            settlement_days: 0,
            maturity_period_value: vec![3, 6, 12],
            maturity_period_type: vec![2, 2, 2],
            rates: vec![0.02, 0.02, 0.02],
        };
        DiscountCurveBuilder::new(&spec).build(calc).unwrap()
    }

    #[test]
    fn test_unknown_index_rejected() {
        let result = FixingIndex::from_name(
            "EONIA",
            Tenor::new(3, TimeUnit::Months),
            MarketCalendar::UnitedStates,
        );
        assert!(matches!(result, Err(SwapError::UnknownIndex { .. })));
    }

    #[test]
    fn test_historical_fixing_preferred() {
        let mut idx = index();
        // Thursday Jan 7, 2016
        let date = Date::from_ymd(2016, 1, 7).unwrap();
        idx.add_fixings(&FixingSeries {
            curvename: "USD-3M".to_string(),
            fixing_dates: vec![date.timestamp()],
            fixing_rates: vec![0.0123],
        })
        .unwrap();

        let curve = flat_curve(date);
        assert_relative_eq!(idx.rate_for(date, &curve).unwrap(), 0.0123);
    }

    #[test]
    fn test_invalid_date_fixing_dropped() {
        let mut idx = index();
        // Saturday Jan 9, 2016 is not a valid fixing date
        let saturday = Date::from_ymd(2016, 1, 9).unwrap();
        idx.add_fixings(&FixingSeries {
            curvename: "USD-3M".to_string(),
            fixing_dates: vec![saturday.timestamp()],
            fixing_rates: vec![0.0123],
        })
        .unwrap();

        assert_eq!(idx.historical_fixing(saturday), None);
    }

    #[test]
    fn test_forward_projection_recovers_deposit_rate() {
        let calc = Date::from_ymd(2016, 1, 7).unwrap();
        let curve = flat_curve(calc);
        let idx = index();

        // With no fixing loaded, the projected rate over the first tenor
        // reproduces the 3M deposit quote the curve was built from
        let rate = idx.rate_for(calc, &curve).unwrap();
        assert_relative_eq!(rate, 0.02, epsilon = 1e-10);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut idx = index();
        let result = idx.add_fixings(&FixingSeries {
            curvename: "USD-3M".to_string(),
            fixing_dates: vec![0, 86_400],
            fixing_rates: vec![0.01],
        });
        assert!(matches!(result, Err(SwapError::FixingLengthMismatch { .. })));
    }

    #[test]
    fn test_series_roundtrip() {
        let series = FixingSeries {
            curvename: "USD-3M".to_string(),
            fixing_dates: vec![1452124800],
            fixing_rates: vec![0.0123],
        };
        let json = serde_json::to_string(&series).unwrap();
        let decoded: FixingSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, series);
    }
}

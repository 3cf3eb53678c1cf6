//! Sequential bootstrap of the discount curve from deposit quotes.

use tracing::debug;

use valmark_core::prelude::*;

use crate::deposit::Deposit;
use crate::discount::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::spec::CurveSpec;

/// Bootstraps a [`DiscountCurve`] from a curve specification.
///
/// Each quote is treated as a simple deposit anchored at the calculation
/// date via the spec's settlement lag, calendar, adjustment convention,
/// end-of-month rule, and day count. Pillar discount factors are solved
/// sequentially from the shortest maturity to the longest:
///
/// 1. Validate the parallel quote sequences.
/// 2. Resolve the spec's convention codes (unknown codes fail the build).
/// 3. For each quote, compute the spot and maturity dates, read the spot
///    discount off the curve built so far, and pin
///    `DF(maturity) = DF(spot) / (1 + rate × τ)`.
/// 4. Require strictly increasing maturities.
///
/// # Example
///
/// ```rust,ignore
/// let curve = DiscountCurveBuilder::new(&spec).build(calc_date)?;
/// let df = curve.discount_factor(payment_date);
/// ```
#[derive(Debug)]
pub struct DiscountCurveBuilder<'a> {
    spec: &'a CurveSpec,
}

impl<'a> DiscountCurveBuilder<'a> {
    /// Creates a builder over a curve specification.
    pub fn new(spec: &'a CurveSpec) -> Self {
        Self { spec }
    }

    /// Bootstraps the curve as of the given calculation date.
    pub fn build(&self, calc_date: Date) -> CurveResult<DiscountCurve> {
        self.spec.validate()?;

        let calendar = self.spec.resolve_calendar()?;
        let convention = self.spec.resolve_convention()?;
        let day_count = self.spec.resolve_day_count()?;

        let mut pillars: Vec<(Date, f64)> = Vec::with_capacity(self.spec.rates.len());

        for (index, &rate) in self.spec.rates.iter().enumerate() {
            let tenor = resolve::tenor(
                self.spec.maturity_period_value[index],
                self.spec.maturity_period_type[index],
            )?;
            let deposit = Deposit::new(
                rate,
                tenor,
                self.spec.settlement_days,
                calendar,
                convention,
                self.spec.end_of_month_flag,
                day_count,
            );

            let maturity = deposit.maturity_date(calc_date)?;
            if let Some(&(prev, _)) = pillars.last() {
                if maturity <= prev {
                    return Err(CurveError::NonMonotonicPillars {
                        index,
                        prev,
                        current: maturity,
                    });
                }
            }

            // Spot discount read off the curve built so far; 1.0 while the
            // curve is still empty and the spot lag is zero.
            let partial =
                DiscountCurve::from_pillars(calc_date, day_count, &pillars);
            let spot_df = partial.discount_factor(deposit.spot_date(calc_date));
            let df = deposit.implied_discount(calc_date, spot_df)?;

            if !df.is_finite() || df <= 0.0 {
                return Err(CurveError::InvalidQuote { index, rate });
            }

            debug!(
                curve = %self.spec.curvename,
                pillar = %maturity,
                df,
                "bootstrapped deposit pillar"
            );
            pillars.push((maturity, df));
        }

        Ok(DiscountCurve::from_pillars(calc_date, day_count, &pillars))
    }
}

//! Single-trade swap valuation.

use std::time::Instant;

use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use valmark_core::prelude::*;
use valmark_curves::{CurveSpec, DiscountCurve, DiscountCurveBuilder};
use valmark_swaps::{FixingIndex, FixingSeries, Schedule, SwapTradeSpec};

use crate::error::{PricingError, PricingResult};
use crate::result::MtmResult;

/// Values one vanilla swap against one bootstrapped discount curve.
///
/// The engine is stateless: the calculation date and every market input
/// arrive as explicit arguments, each valuation owns its curve and index
/// exclusively, and nothing is cached between calls.
///
/// Valuation steps:
///
/// 1. Resolve the curve's and both legs' convention codes.
/// 2. Bootstrap the discount curve as of the calculation date.
/// 3. Generate the fixed and floating leg schedules.
/// 4. Construct the floating index (tenor from the curve spec) and load
///    the supplied fixings.
/// 5. Compute the swap NPV as an internal validity check.
/// 6. Record, for every fixed leg cashflow strictly after the calculation
///    date: date, accrual amount, discount factor, and the time fraction
///    normalized by a one-year day count basis.
/// 7. Record date and accrual amount for every future floating cashflow.
///
/// Any failure in steps 1-7 yields a failed [`MtmResult`] carrying the
/// underlying message and empty sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapValuationEngine;

impl SwapValuationEngine {
    /// Creates a valuation engine.
    pub fn new() -> Self {
        Self
    }

    /// Values a trade, converting any pricing failure into a failed
    /// result. Never panics and never propagates an error upward.
    pub fn value(
        &self,
        curve_spec: &CurveSpec,
        fixings: &FixingSeries,
        trade: &SwapTradeSpec,
        calc_date: Date,
    ) -> MtmResult {
        let started = Instant::now();
        let mut result = match self.value_inner(curve_spec, fixings, trade, calc_date) {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    tradeid = %trade.tradeid,
                    curve = %curve_spec.curvename,
                    %error,
                    "valuation failed"
                );
                MtmResult::failed(&trade.tradeid, &curve_spec.curvename, error.to_string())
            }
        };
        result.compute_time_micros = started.elapsed().as_micros() as i64;
        result
    }

    fn value_inner(
        &self,
        curve_spec: &CurveSpec,
        fixings: &FixingSeries,
        trade: &SwapTradeSpec,
        calc_date: Date,
    ) -> PricingResult<MtmResult> {
        // Conventions shared by both legs come from the curve spec, the
        // leg-specific codes from the trade.
        let calendar = curve_spec.resolve_calendar()?;
        let curve_day_count = curve_spec.resolve_day_count()?;
        let swap_type = trade.swap_type()?;

        let curve = DiscountCurveBuilder::new(curve_spec).build(calc_date)?;

        let fixed_leg = trade.fixed_leg();
        let fixed_day_count = fixed_leg.day_count()?;
        let fixed_schedule = Schedule::generate(&fixed_leg.schedule_config(calendar)?)?;

        let float_leg = trade.float_leg();
        let float_day_count = float_leg.day_count()?;
        let float_schedule = Schedule::generate(&float_leg.schedule_config(calendar)?)?;

        let mut index =
            FixingIndex::from_name(&trade.ibor_index, curve_spec.index_tenor()?, calendar)?;
        index.add_fixings(fixings)?;

        // Leg cashflows: amount = notional x rate x accrual fraction,
        // paid at the period end.
        let fixed_flows: Vec<(Date, f64)> = fixed_schedule
            .periods()
            .map(|(start, end)| {
                let tau = year_fraction(fixed_day_count, start, end);
                (end, trade.notional * trade.fixed_rate * tau)
            })
            .collect();

        let mut float_flows: Vec<(Date, f64)> = Vec::with_capacity(float_schedule.len());
        for (start, end) in float_schedule.periods() {
            let rate = index.rate_for(start, &curve)?;
            let tau = year_fraction(float_day_count, start, end);
            float_flows.push((end, trade.notional * (rate + trade.float_spread) * tau));
        }

        // Internal validity check: the netted present value must be a
        // finite number. The NPV itself is not part of the output.
        let npv = swap_type.net_sign()
            * (present_value(&float_flows, &curve, calc_date)
                - present_value(&fixed_flows, &curve, calc_date));
        if !npv.is_finite() {
            return Err(PricingError::NonFiniteNpv);
        }
        debug!(tradeid = %trade.tradeid, npv, "validity check passed");

        // Time fractions are normalized by an actual one-year basis under
        // the curve's day count, not by the swap tenor.
        let one_year = calendar.advance(
            calc_date,
            Tenor::new(1, TimeUnit::Years),
            BusinessDayConvention::Following,
            false,
        )?;
        let days_in_year = curve_day_count.day_count(calc_date, one_year) as f64;

        let mut result = MtmResult::new(&trade.tradeid, &curve_spec.curvename);
        for (date, amount) in fixed_flows {
            if date > calc_date {
                let days_to_flow = curve_day_count.day_count(calc_date, date) as f64;
                result.fix_leg_dates.push(date.timestamp());
                result.fix_leg_amounts.push(amount);
                result.discount_values.push(curve.discount_factor(date));
                result.leg_fractions.push(days_to_flow / days_in_year);
            }
        }
        for (date, amount) in float_flows {
            if date > calc_date {
                result.flt_leg_dates.push(date.timestamp());
                result.flt_leg_amounts.push(amount);
            }
        }

        Ok(result)
    }
}

/// Sum of discounted future amounts (flows on or before the calculation
/// date are excluded).
fn present_value(flows: &[(Date, f64)], curve: &DiscountCurve, calc_date: Date) -> f64 {
    flows
        .iter()
        .filter(|(date, _)| *date > calc_date)
        .map(|(date, amount)| amount * curve.discount_factor(*date))
        .sum()
}

/// Year fraction as `f64` under the given day count.
fn year_fraction(day_count: DayCountConvention, start: Date, end: Date) -> f64 {
    day_count.year_fraction(start, end).to_f64().unwrap_or(0.0)
}

//! Wire-level swap trade specification.

use serde::{Deserialize, Serialize};

use valmark_core::prelude::*;

use crate::error::SwapResult;
use crate::schedule::ScheduleConfig;

/// A vanilla fixed-vs-floating swap trade as carried on the wire.
///
/// The feed flattens both legs into prefixed fields; field names are fixed
/// upstream and must not change. Missing fields decode to their zero
/// values, matching proto3 JSON semantics. `bookid`, `counterparty`,
/// `settlement_date`, and the per-leg calendar names are carried for
/// downstream consumers but do not enter the valuation, which uses the
/// curve's calendar throughout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapTradeSpec {
    /// Trade identifier, echoed into the valuation result.
    pub tradeid: String,
    /// Trading book identifier.
    pub bookid: String,
    /// Counterparty identifier.
    pub counterparty: String,
    /// Trade notional.
    pub notional: f64,
    /// Swap direction: +1 pays fixed, -1 receives fixed.
    pub payer_receiver_flag: i32,
    /// Trade settlement date (epoch seconds).
    pub settlement_date: i64,
    /// Fixed leg coupon rate.
    pub fixed_rate: f64,
    /// Fixed leg day count code.
    pub fixed_leg_dcc: String,
    /// Spread over the floating index.
    pub float_spread: f64,
    /// Floating leg day count code.
    pub float_leg_dcc: String,
    /// Floating index name (e.g. `USDLibor`).
    pub ibor_index: String,

    /// Fixed leg accrual start (epoch seconds).
    pub fixed_leg_start_date: i64,
    /// Fixed leg maturity (epoch seconds).
    pub fixed_leg_end_date: i64,
    /// Fixed leg coupon tenor length.
    pub fixed_leg_tenor_frequency: i32,
    /// Fixed leg coupon tenor unit code.
    pub fixed_leg_tenor_period_enum: i32,
    /// Fixed leg calendar name (carried, not priced).
    pub fixed_leg_calendar_name: String,
    /// Fixed leg business day convention code.
    pub fixed_leg_biz_day_conv: i32,
    /// Fixed leg termination convention code.
    pub fixed_leg_termination_day_conv: i32,
    /// Fixed leg date generation rule code.
    pub fixed_leg_date_gen_rule: i32,
    /// Fixed leg end-of-month flag.
    pub fixed_leg_end_of_month_flag: bool,

    /// Floating leg accrual start (epoch seconds).
    pub float_leg_start_date: i64,
    /// Floating leg maturity (epoch seconds).
    pub float_leg_end_date: i64,
    /// Floating leg coupon tenor length.
    pub float_leg_tenor_frequency: i32,
    /// Floating leg coupon tenor unit code.
    pub float_leg_tenor_period_enum: i32,
    /// Floating leg calendar name (carried, not priced).
    pub float_leg_calendar_name: String,
    /// Floating leg business day convention code.
    pub float_leg_biz_day_conv: i32,
    /// Floating leg termination convention code.
    pub float_leg_termination_day_conv: i32,
    /// Floating leg date generation rule code.
    pub float_leg_date_gen_rule: i32,
    /// Floating leg end-of-month flag.
    pub float_leg_end_of_month_flag: bool,
}

/// One leg's schedule parameters, extracted from the flattened trade.
#[derive(Debug, Clone, PartialEq)]
pub struct LegSpec {
    /// Accrual start (epoch seconds).
    pub start_date: i64,
    /// Maturity (epoch seconds).
    pub end_date: i64,
    /// Coupon tenor length.
    pub tenor_frequency: i32,
    /// Coupon tenor unit code.
    pub tenor_period_enum: i32,
    /// Business day convention code.
    pub biz_day_conv: i32,
    /// Termination convention code.
    pub termination_day_conv: i32,
    /// Date generation rule code.
    pub date_gen_rule: i32,
    /// End-of-month flag.
    pub end_of_month_flag: bool,
    /// Day count code.
    pub dcc: String,
}

impl LegSpec {
    /// Resolves this leg into a schedule configuration over the given
    /// calendar, failing on any unrecognized convention code.
    pub fn schedule_config(&self, calendar: MarketCalendar) -> SwapResult<ScheduleConfig> {
        Ok(ScheduleConfig {
            start: Date::from_timestamp(self.start_date)?,
            end: Date::from_timestamp(self.end_date)?,
            tenor: resolve::tenor(self.tenor_frequency, self.tenor_period_enum)?,
            calendar,
            convention: resolve::business_day_convention(self.biz_day_conv)?,
            termination_convention: resolve::business_day_convention(
                self.termination_day_conv,
            )?,
            rule: resolve::date_generation(self.date_gen_rule)?,
            end_of_month: self.end_of_month_flag,
        })
    }

    /// Resolves this leg's day count code.
    pub fn day_count(&self) -> ValmarkResult<DayCountConvention> {
        resolve::day_count(&self.dcc)
    }
}

impl SwapTradeSpec {
    /// Returns the fixed leg parameters.
    pub fn fixed_leg(&self) -> LegSpec {
        LegSpec {
            start_date: self.fixed_leg_start_date,
            end_date: self.fixed_leg_end_date,
            tenor_frequency: self.fixed_leg_tenor_frequency,
            tenor_period_enum: self.fixed_leg_tenor_period_enum,
            biz_day_conv: self.fixed_leg_biz_day_conv,
            termination_day_conv: self.fixed_leg_termination_day_conv,
            date_gen_rule: self.fixed_leg_date_gen_rule,
            end_of_month_flag: self.fixed_leg_end_of_month_flag,
            dcc: self.fixed_leg_dcc.clone(),
        }
    }

    /// Returns the floating leg parameters.
    pub fn float_leg(&self) -> LegSpec {
        LegSpec {
            start_date: self.float_leg_start_date,
            end_date: self.float_leg_end_date,
            tenor_frequency: self.float_leg_tenor_frequency,
            tenor_period_enum: self.float_leg_tenor_period_enum,
            biz_day_conv: self.float_leg_biz_day_conv,
            termination_day_conv: self.float_leg_termination_day_conv,
            date_gen_rule: self.float_leg_date_gen_rule,
            end_of_month_flag: self.float_leg_end_of_month_flag,
            dcc: self.float_leg_dcc.clone(),
        }
    }

    /// Resolves the payer/receiver flag.
    pub fn swap_type(&self) -> ValmarkResult<SwapType> {
        resolve::swap_type(self.payer_receiver_flag)
    }
}

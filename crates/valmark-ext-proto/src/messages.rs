//! Prost message mirrors of the wire types.
//!
//! Field numbers are the stable interchange identity; the MTM message
//! numbering matches the downstream aggregator's schema and must not be
//! reshuffled.

use valmark_curves::CurveSpec;
use valmark_engine::MtmResult;
use valmark_swaps::{FixingSeries, SwapTradeSpec};

/// Binary form of a discount curve specification.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Curve {
    /// Curve identifier.
    #[prost(string, tag = "1")]
    pub curvename: String,
    /// Floating index tenor length.
    #[prost(int32, tag = "2")]
    pub index_frequency: i32,
    /// Floating index tenor unit code.
    #[prost(int32, tag = "3")]
    pub index_frequency_type: i32,
    /// Calendar string code.
    #[prost(string, tag = "4")]
    pub calendar: String,
    /// Business day convention code.
    #[prost(int32, tag = "5")]
    pub bussiness_convention: i32,
    /// Day count string code.
    #[prost(string, tag = "6")]
    pub dcc: String,
    /// End-of-month rule flag.
    #[prost(bool, tag = "7")]
    pub end_of_month_flag: bool,
    /// Settlement lag in business days.
    #[prost(int32, tag = "8")]
    pub settlement_days: i32,
    /// Deposit maturity lengths.
    #[prost(int32, repeated, tag = "9")]
    pub maturity_period_value: Vec<i32>,
    /// Deposit maturity unit codes.
    #[prost(int32, repeated, tag = "10")]
    pub maturity_period_type: Vec<i32>,
    /// Simple deposit rates.
    #[prost(double, repeated, tag = "11")]
    pub rates: Vec<f64>,
}

impl From<&CurveSpec> for Curve {
    fn from(spec: &CurveSpec) -> Self {
        Self {
            curvename: spec.curvename.clone(),
            index_frequency: spec.index_frequency,
            index_frequency_type: spec.index_frequency_type,
            calendar: spec.calendar.clone(),
            bussiness_convention: spec.business_convention,
            dcc: spec.dcc.clone(),
            end_of_month_flag: spec.end_of_month_flag,
            settlement_days: spec.settlement_days,
            maturity_period_value: spec.maturity_period_value.clone(),
            maturity_period_type: spec.maturity_period_type.clone(),
            rates: spec.rates.clone(),
        }
    }
}

impl From<Curve> for CurveSpec {
    fn from(message: Curve) -> Self {
        Self {
            curvename: message.curvename,
            index_frequency: message.index_frequency,
            index_frequency_type: message.index_frequency_type,
            calendar: message.calendar,
            business_convention: message.bussiness_convention,
            dcc: message.dcc,
            end_of_month_flag: message.end_of_month_flag,
            settlement_days: message.settlement_days,
            maturity_period_value: message.maturity_period_value,
            maturity_period_type: message.maturity_period_type,
            rates: message.rates,
        }
    }
}

/// Binary form of a fixing series.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Fixing {
    /// Name of the curve/index the fixings belong to.
    #[prost(string, tag = "1")]
    pub curvename: String,
    /// Fixing dates as epoch seconds.
    #[prost(int64, repeated, tag = "2")]
    pub fixing_dates: Vec<i64>,
    /// Observed rates.
    #[prost(double, repeated, tag = "3")]
    pub fixing_rates: Vec<f64>,
}

impl From<&FixingSeries> for Fixing {
    fn from(series: &FixingSeries) -> Self {
        Self {
            curvename: series.curvename.clone(),
            fixing_dates: series.fixing_dates.clone(),
            fixing_rates: series.fixing_rates.clone(),
        }
    }
}

impl From<Fixing> for FixingSeries {
    fn from(message: Fixing) -> Self {
        Self {
            curvename: message.curvename,
            fixing_dates: message.fixing_dates,
            fixing_rates: message.fixing_rates,
        }
    }
}

/// Binary form of a swap trade.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SwapTrade {
    /// Trade identifier.
    #[prost(string, tag = "1")]
    pub tradeid: String,
    /// Trading book identifier.
    #[prost(string, tag = "2")]
    pub bookid: String,
    /// Counterparty identifier.
    #[prost(string, tag = "3")]
    pub counterparty: String,
    /// Trade notional.
    #[prost(double, tag = "4")]
    pub notional: f64,
    /// Payer/receiver flag (+1 pays fixed, -1 receives fixed).
    #[prost(int32, tag = "5")]
    pub payer_receiver_flag: i32,
    /// Trade settlement date (epoch seconds).
    #[prost(int64, tag = "6")]
    pub settlement_date: i64,
    /// Fixed leg coupon rate.
    #[prost(double, tag = "7")]
    pub fixed_rate: f64,
    /// Fixed leg day count code.
    #[prost(string, tag = "8")]
    pub fixed_leg_dcc: String,
    /// Spread over the floating index.
    #[prost(double, tag = "9")]
    pub float_spread: f64,
    /// Floating leg day count code.
    #[prost(string, tag = "10")]
    pub float_leg_dcc: String,
    /// Floating index name.
    #[prost(string, tag = "11")]
    pub ibor_index: String,
    /// Fixed leg accrual start (epoch seconds).
    #[prost(int64, tag = "12")]
    pub fixed_leg_start_date: i64,
    /// Fixed leg maturity (epoch seconds).
    #[prost(int64, tag = "13")]
    pub fixed_leg_end_date: i64,
    /// Fixed leg coupon tenor length.
    #[prost(int32, tag = "14")]
    pub fixed_leg_tenor_frequency: i32,
    /// Fixed leg coupon tenor unit code.
    #[prost(int32, tag = "15")]
    pub fixed_leg_tenor_period_enum: i32,
    /// Fixed leg calendar name.
    #[prost(string, tag = "16")]
    pub fixed_leg_calendar_name: String,
    /// Fixed leg business day convention code.
    #[prost(int32, tag = "17")]
    pub fixed_leg_biz_day_conv: i32,
    /// Fixed leg termination convention code.
    #[prost(int32, tag = "18")]
    pub fixed_leg_termination_day_conv: i32,
    /// Fixed leg date generation rule code.
    #[prost(int32, tag = "19")]
    pub fixed_leg_date_gen_rule: i32,
    /// Fixed leg end-of-month flag.
    #[prost(bool, tag = "20")]
    pub fixed_leg_end_of_month_flag: bool,
    /// Floating leg accrual start (epoch seconds).
    #[prost(int64, tag = "21")]
    pub float_leg_start_date: i64,
    /// Floating leg maturity (epoch seconds).
    #[prost(int64, tag = "22")]
    pub float_leg_end_date: i64,
    /// Floating leg coupon tenor length.
    #[prost(int32, tag = "23")]
    pub float_leg_tenor_frequency: i32,
    /// Floating leg coupon tenor unit code.
    #[prost(int32, tag = "24")]
    pub float_leg_tenor_period_enum: i32,
    /// Floating leg calendar name.
    #[prost(string, tag = "25")]
    pub float_leg_calendar_name: String,
    /// Floating leg business day convention code.
    #[prost(int32, tag = "26")]
    pub float_leg_biz_day_conv: i32,
    /// Floating leg termination convention code.
    #[prost(int32, tag = "27")]
    pub float_leg_termination_day_conv: i32,
    /// Floating leg date generation rule code.
    #[prost(int32, tag = "28")]
    pub float_leg_date_gen_rule: i32,
    /// Floating leg end-of-month flag.
    #[prost(bool, tag = "29")]
    pub float_leg_end_of_month_flag: bool,
}

impl From<&SwapTradeSpec> for SwapTrade {
    fn from(trade: &SwapTradeSpec) -> Self {
        Self {
            tradeid: trade.tradeid.clone(),
            bookid: trade.bookid.clone(),
            counterparty: trade.counterparty.clone(),
            notional: trade.notional,
            payer_receiver_flag: trade.payer_receiver_flag,
            settlement_date: trade.settlement_date,
            fixed_rate: trade.fixed_rate,
            fixed_leg_dcc: trade.fixed_leg_dcc.clone(),
            float_spread: trade.float_spread,
            float_leg_dcc: trade.float_leg_dcc.clone(),
            ibor_index: trade.ibor_index.clone(),
            fixed_leg_start_date: trade.fixed_leg_start_date,
            fixed_leg_end_date: trade.fixed_leg_end_date,
            fixed_leg_tenor_frequency: trade.fixed_leg_tenor_frequency,
            fixed_leg_tenor_period_enum: trade.fixed_leg_tenor_period_enum,
            fixed_leg_calendar_name: trade.fixed_leg_calendar_name.clone(),
            fixed_leg_biz_day_conv: trade.fixed_leg_biz_day_conv,
            fixed_leg_termination_day_conv: trade.fixed_leg_termination_day_conv,
            fixed_leg_date_gen_rule: trade.fixed_leg_date_gen_rule,
            fixed_leg_end_of_month_flag: trade.fixed_leg_end_of_month_flag,
            float_leg_start_date: trade.float_leg_start_date,
            float_leg_end_date: trade.float_leg_end_date,
            float_leg_tenor_frequency: trade.float_leg_tenor_frequency,
            float_leg_tenor_period_enum: trade.float_leg_tenor_period_enum,
            float_leg_calendar_name: trade.float_leg_calendar_name.clone(),
            float_leg_biz_day_conv: trade.float_leg_biz_day_conv,
            float_leg_termination_day_conv: trade.float_leg_termination_day_conv,
            float_leg_date_gen_rule: trade.float_leg_date_gen_rule,
            float_leg_end_of_month_flag: trade.float_leg_end_of_month_flag,
        }
    }
}

impl From<SwapTrade> for SwapTradeSpec {
    fn from(message: SwapTrade) -> Self {
        Self {
            tradeid: message.tradeid,
            bookid: message.bookid,
            counterparty: message.counterparty,
            notional: message.notional,
            payer_receiver_flag: message.payer_receiver_flag,
            settlement_date: message.settlement_date,
            fixed_rate: message.fixed_rate,
            fixed_leg_dcc: message.fixed_leg_dcc,
            float_spread: message.float_spread,
            float_leg_dcc: message.float_leg_dcc,
            ibor_index: message.ibor_index,
            fixed_leg_start_date: message.fixed_leg_start_date,
            fixed_leg_end_date: message.fixed_leg_end_date,
            fixed_leg_tenor_frequency: message.fixed_leg_tenor_frequency,
            fixed_leg_tenor_period_enum: message.fixed_leg_tenor_period_enum,
            fixed_leg_calendar_name: message.fixed_leg_calendar_name,
            fixed_leg_biz_day_conv: message.fixed_leg_biz_day_conv,
            fixed_leg_termination_day_conv: message.fixed_leg_termination_day_conv,
            fixed_leg_date_gen_rule: message.fixed_leg_date_gen_rule,
            fixed_leg_end_of_month_flag: message.fixed_leg_end_of_month_flag,
            float_leg_start_date: message.float_leg_start_date,
            float_leg_end_date: message.float_leg_end_date,
            float_leg_tenor_frequency: message.float_leg_tenor_frequency,
            float_leg_tenor_period_enum: message.float_leg_tenor_period_enum,
            float_leg_calendar_name: message.float_leg_calendar_name,
            float_leg_biz_day_conv: message.float_leg_biz_day_conv,
            float_leg_termination_day_conv: message.float_leg_termination_day_conv,
            float_leg_date_gen_rule: message.float_leg_date_gen_rule,
            float_leg_end_of_month_flag: message.float_leg_end_of_month_flag,
        }
    }
}

/// Binary form of a valuation result.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Mtm {
    /// Trade identifier.
    #[prost(string, tag = "1")]
    pub tradeid: String,
    /// Curve identifier.
    #[prost(string, tag = "2")]
    pub curvename: String,
    /// Fixed leg cashflow dates (epoch seconds).
    #[prost(int64, repeated, tag = "3")]
    pub fixlegdates: Vec<i64>,
    /// Fixed leg cashflow amounts.
    #[prost(double, repeated, tag = "4")]
    pub fixlegamount: Vec<f64>,
    /// Floating leg cashflow dates (epoch seconds).
    #[prost(int64, repeated, tag = "5")]
    pub fltlegdates: Vec<i64>,
    /// Floating leg cashflow amounts.
    #[prost(double, repeated, tag = "6")]
    pub fltlegamount: Vec<f64>,
    /// Discount factors at the fixed leg dates.
    #[prost(double, repeated, tag = "7")]
    pub discountvalues: Vec<f64>,
    /// Normalized time fractions at the fixed leg dates.
    #[prost(double, repeated, tag = "8")]
    pub legfractions: Vec<f64>,
    /// Failure flag.
    #[prost(bool, tag = "9")]
    pub haserrored: bool,
    /// Failure description.
    #[prost(string, tag = "10")]
    pub error: String,
    /// Wall-clock valuation time in microseconds.
    #[prost(int64, tag = "11")]
    pub computetimemicros: i64,
}

impl From<&MtmResult> for Mtm {
    fn from(result: &MtmResult) -> Self {
        Self {
            tradeid: result.tradeid.clone(),
            curvename: result.curvename.clone(),
            fixlegdates: result.fix_leg_dates.clone(),
            fixlegamount: result.fix_leg_amounts.clone(),
            fltlegdates: result.flt_leg_dates.clone(),
            fltlegamount: result.flt_leg_amounts.clone(),
            discountvalues: result.discount_values.clone(),
            legfractions: result.leg_fractions.clone(),
            haserrored: result.has_errored,
            error: result.error.clone(),
            computetimemicros: result.compute_time_micros,
        }
    }
}

impl From<Mtm> for MtmResult {
    fn from(message: Mtm) -> Self {
        Self {
            tradeid: message.tradeid,
            curvename: message.curvename,
            fix_leg_dates: message.fixlegdates,
            fix_leg_amounts: message.fixlegamount,
            flt_leg_dates: message.fltlegdates,
            flt_leg_amounts: message.fltlegamount,
            discount_values: message.discountvalues,
            leg_fractions: message.legfractions,
            has_errored: message.haserrored,
            error: message.error,
            compute_time_micros: message.computetimemicros,
        }
    }
}

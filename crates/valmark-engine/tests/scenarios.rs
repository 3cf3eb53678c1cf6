//! End-to-end valuation scenarios over the engine and batch service.

use approx::assert_relative_eq;
use serde_json::json;

use valmark_core::Date;
use valmark_curves::CurveSpec;
use valmark_engine::{BatchValuationService, ConnectionContext, MtmResult, SwapValuationEngine};
use valmark_swaps::{FixingSeries, SwapTradeSpec};

fn calc_date() -> Date {
    Date::from_ymd(2016, 1, 7).unwrap()
}

fn curve_spec() -> CurveSpec {
    CurveSpec {
        curvename: "USD-3M".to_string(),
        index_frequency: 3,
        index_frequency_type: 2,
        calendar: "UnitedStates".to_string(),
        business_convention: 1,
        dcc: "Actual360".to_string(),
        end_of_month_flag: false,
        settlement_days: 0,
        maturity_period_value: vec![3],
        maturity_period_type: vec![2],
        rates: vec![0.02],
    }
}

fn one_year_swap() -> SwapTradeSpec {
    let start = calc_date();
    let end = start.add_years(1).unwrap();
    SwapTradeSpec {
        tradeid: "SWP-00001".to_string(),
        bookid: "BOOK-1".to_string(),
        counterparty: "CPTY-9".to_string(),
        notional: 1_000_000.0,
        payer_receiver_flag: 1,
        fixed_rate: 0.025,
        fixed_leg_dcc: "Actual360".to_string(),
        float_spread: 0.0,
        float_leg_dcc: "Actual360".to_string(),
        ibor_index: "USDLibor".to_string(),
        fixed_leg_start_date: start.timestamp(),
        fixed_leg_end_date: end.timestamp(),
        fixed_leg_tenor_frequency: 3,
        fixed_leg_tenor_period_enum: 2,
        fixed_leg_biz_day_conv: 1,
        fixed_leg_termination_day_conv: 1,
        fixed_leg_date_gen_rule: 0,
        float_leg_start_date: start.timestamp(),
        float_leg_end_date: end.timestamp(),
        float_leg_tenor_frequency: 3,
        float_leg_tenor_period_enum: 2,
        float_leg_biz_day_conv: 1,
        float_leg_termination_day_conv: 1,
        float_leg_date_gen_rule: 0,
        ..SwapTradeSpec::default()
    }
}

fn bundle(curve: &CurveSpec, trade: &SwapTradeSpec, fixing: &FixingSeries) -> String {
    json!({
        "calcdate": json!({ "calc_date": calc_date().to_string() }).to_string(),
        "trade": serde_json::to_string(trade).unwrap(),
        "curve": serde_json::to_string(curve).unwrap(),
        "fixing": serde_json::to_string(fixing).unwrap(),
        "debug": "node-0"
    })
    .to_string()
}

// Scenario A: a single 3M deposit quote and a one-year quarterly swap
// starting on the calculation date produce four cashflows per leg.
#[test]
fn scenario_a_quarterly_swap() {
    let engine = SwapValuationEngine::new();
    let mtm = engine.value(
        &curve_spec(),
        &FixingSeries::default(),
        &one_year_swap(),
        calc_date(),
    );

    assert!(!mtm.is_failed(), "failure: {}", mtm.error);
    assert_eq!(mtm.fix_leg_dates.len(), 4);
    assert_eq!(mtm.flt_leg_dates.len(), 4);
    assert!(mtm.error.is_empty());
}

// Scenario B: an unrecognized calendar fails the item with a message and
// empty sequences.
#[test]
fn scenario_b_unknown_calendar() {
    let mut curve = curve_spec();
    curve.calendar = "Mars".to_string();

    let engine = SwapValuationEngine::new();
    let mtm = engine.value(&curve, &FixingSeries::default(), &one_year_swap(), calc_date());

    assert!(mtm.is_failed());
    assert!(!mtm.error.is_empty());
    assert!(mtm.fix_leg_dates.is_empty());
    assert!(mtm.fix_leg_amounts.is_empty());
    assert!(mtm.flt_leg_dates.is_empty());
    assert!(mtm.discount_values.is_empty());
    assert!(mtm.leg_fractions.is_empty());
}

// Scenario C: a malformed item in a batch of three fails in place;
// the outbound batch still has three items in order.
#[test]
fn scenario_c_malformed_item_isolated() {
    let service = BatchValuationService::new();
    let mut context = ConnectionContext::new();

    let good = bundle(&curve_spec(), &one_year_swap(), &FixingSeries::default());
    let items = vec![good.clone(), "{not valid json".to_string(), good];
    let out = service.process_batch(&mut context, &items);

    assert_eq!(out.len(), 3);
    let results: Vec<MtmResult> = out
        .iter()
        .map(|item| serde_json::from_str(item).unwrap())
        .collect();
    assert!(!results[0].is_failed(), "item 1: {}", results[0].error);
    assert!(results[1].is_failed());
    assert!(!results[2].is_failed(), "item 3: {}", results[2].error);
}

// Scenario D: a fixing dated on a non-business day is ignored and the
// corresponding floating amount falls back to the forward projection.
#[test]
fn scenario_d_weekend_fixing_ignored() {
    let engine = SwapValuationEngine::new();

    // Unadjusted conventions so the first float period genuinely starts
    // on Saturday Jan 9, 2016
    let saturday = Date::from_ymd(2016, 1, 9).unwrap();
    let end = saturday.add_years(1).unwrap();
    let mut trade = one_year_swap();
    trade.fixed_leg_start_date = saturday.timestamp();
    trade.fixed_leg_end_date = end.timestamp();
    trade.fixed_leg_biz_day_conv = 4;
    trade.fixed_leg_termination_day_conv = 4;
    trade.float_leg_start_date = saturday.timestamp();
    trade.float_leg_end_date = end.timestamp();
    trade.float_leg_biz_day_conv = 4;
    trade.float_leg_termination_day_conv = 4;

    let baseline = engine.value(&curve_spec(), &FixingSeries::default(), &trade, calc_date());

    // An absurd rate on the Saturday; applied, it would multiply the
    // first floating amount by ~25x
    let weekend_fixing = FixingSeries {
        curvename: "USD-3M".to_string(),
        fixing_dates: vec![saturday.timestamp()],
        fixing_rates: vec![0.50],
    };
    let with_fixing = engine.value(&curve_spec(), &weekend_fixing, &trade, calc_date());

    assert!(!baseline.is_failed(), "baseline: {}", baseline.error);
    assert!(!with_fixing.is_failed(), "with fixing: {}", with_fixing.error);
    assert_eq!(with_fixing.flt_leg_amounts, baseline.flt_leg_amounts);
    // Forward-projected, the first amount reflects ~2%, nowhere near 50%
    assert!(with_fixing.flt_leg_amounts[0].abs() < 1_000_000.0 * 0.10 * 0.25);
}

// Parallel sequence lengths always agree, and no cashflow sits on or
// before the calculation date.
#[test]
fn property_sequence_alignment_and_future_dates() {
    let engine = SwapValuationEngine::new();
    let mtm = engine.value(
        &curve_spec(),
        &FixingSeries::default(),
        &one_year_swap(),
        calc_date(),
    );

    assert_eq!(mtm.fix_leg_dates.len(), mtm.fix_leg_amounts.len());
    assert_eq!(mtm.fix_leg_dates.len(), mtm.discount_values.len());
    assert_eq!(mtm.fix_leg_dates.len(), mtm.leg_fractions.len());
    assert_eq!(mtm.flt_leg_dates.len(), mtm.flt_leg_amounts.len());

    let cutoff = calc_date().timestamp();
    for &ts in mtm.fix_leg_dates.iter().chain(&mtm.flt_leg_dates) {
        assert!(ts > cutoff);
    }
}

// Discount factors decrease with maturity under positive rates.
#[test]
fn property_discount_monotonicity() {
    let mut curve = curve_spec();
    curve.maturity_period_value = vec![3, 6, 12];
    curve.maturity_period_type = vec![2, 2, 2];
    curve.rates = vec![0.02, 0.022, 0.025];

    let mut trade = one_year_swap();
    let end = calc_date().add_years(5).unwrap();
    trade.fixed_leg_end_date = end.timestamp();
    trade.float_leg_end_date = end.timestamp();

    let engine = SwapValuationEngine::new();
    let mtm = engine.value(&curve, &FixingSeries::default(), &trade, calc_date());

    assert!(!mtm.is_failed(), "failure: {}", mtm.error);
    for pair in mtm.discount_values.windows(2) {
        assert!(pair[0] >= pair[1], "discount factors must not increase");
    }
    for &df in &mtm.discount_values {
        assert!(df > 0.0 && df <= 1.0);
    }
}

// Serializing a result and decoding it back is the identity.
#[test]
fn property_roundtrip_idempotence() {
    let engine = SwapValuationEngine::new();
    let mtm = engine.value(
        &curve_spec(),
        &FixingSeries::default(),
        &one_year_swap(),
        calc_date(),
    );

    let json = serde_json::to_string(&mtm).unwrap();
    let decoded: MtmResult = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, mtm);
    assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
}

// Mismatched parallel quote sequences are a hard failure, not a warning.
#[test]
fn property_quote_length_mismatch_fails() {
    let mut curve = curve_spec();
    curve.maturity_period_type = vec![2, 2];

    let engine = SwapValuationEngine::new();
    let mtm = engine.value(&curve, &FixingSeries::default(), &one_year_swap(), calc_date());

    assert!(mtm.is_failed());
    assert!(mtm.error.contains("equal length"));
}

// A historical fixing on a valid business day does flow into the first
// floating amount.
#[test]
fn historical_fixing_applies_on_business_day() {
    let engine = SwapValuationEngine::new();
    let fixing = FixingSeries {
        curvename: "USD-3M".to_string(),
        fixing_dates: vec![calc_date().timestamp()],
        fixing_rates: vec![0.03],
    };
    let mtm = engine.value(&curve_spec(), &fixing, &one_year_swap(), calc_date());

    assert!(!mtm.is_failed());
    assert_relative_eq!(
        mtm.flt_leg_amounts[0],
        1_000_000.0 * 0.03 * 91.0 / 360.0,
        epsilon = 1e-6
    );
}

//! The mark-to-market valuation result.

use serde::{Deserialize, Serialize};

/// One trade's mark-to-market valuation.
///
/// Wire field names are fixed by the downstream exposure aggregator and
/// must not change. All primitive fields serialize even when zero or
/// false. The discount factor and time fraction sequences align
/// index-for-index with the fixed leg dates; the floating leg carries
/// dates and amounts only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MtmResult {
    /// Trade identifier.
    pub tradeid: String,
    /// Curve identifier the trade was valued against.
    pub curvename: String,
    /// Fixed leg cashflow dates (epoch seconds), strictly after the
    /// calculation date.
    #[serde(rename = "fixlegdates")]
    pub fix_leg_dates: Vec<i64>,
    /// Fixed leg cashflow amounts, parallel to `fixlegdates`.
    #[serde(rename = "fixlegamount")]
    pub fix_leg_amounts: Vec<f64>,
    /// Floating leg cashflow dates (epoch seconds).
    #[serde(rename = "fltlegdates")]
    pub flt_leg_dates: Vec<i64>,
    /// Floating leg cashflow amounts, parallel to `fltlegdates`.
    #[serde(rename = "fltlegamount")]
    pub flt_leg_amounts: Vec<f64>,
    /// Discount factors at the fixed leg dates.
    #[serde(rename = "discountvalues")]
    pub discount_values: Vec<f64>,
    /// Time fractions at the fixed leg dates, normalized by a one-year
    /// day count basis.
    #[serde(rename = "legfractions")]
    pub leg_fractions: Vec<f64>,
    /// True when the valuation failed; all sequences are then empty.
    #[serde(rename = "haserrored")]
    pub has_errored: bool,
    /// Failure description when `haserrored` is set, empty otherwise.
    pub error: String,
    /// Wall-clock valuation time in microseconds.
    #[serde(rename = "computetimemicros")]
    pub compute_time_micros: i64,
}

impl MtmResult {
    /// Creates an empty result shell for a trade/curve pair.
    pub fn new(tradeid: impl Into<String>, curvename: impl Into<String>) -> Self {
        Self {
            tradeid: tradeid.into(),
            curvename: curvename.into(),
            ..Self::default()
        }
    }

    /// Creates a failed result carrying an error message and no
    /// cashflows.
    pub fn failed(
        tradeid: impl Into<String>,
        curvename: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            tradeid: tradeid.into(),
            curvename: curvename.into(),
            has_errored: true,
            error: message.into(),
            ..Self::default()
        }
    }

    /// Returns true if this result reports a failure.
    pub fn is_failed(&self) -> bool {
        self.has_errored
    }
}

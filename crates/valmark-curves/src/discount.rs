//! Log-linear discount factor curve.

use rust_decimal::prelude::ToPrimitive;

use valmark_core::prelude::*;

/// A bootstrapped discount factor curve.
///
/// Stores the log discount factor at each pillar and interpolates
/// linearly in log-DF over the year fraction axis, which is equivalent to
/// piecewise-constant instantaneous forward rates. Beyond the last pillar
/// the final segment's slope is extended (flat-forward extrapolation).
///
/// The year fraction axis uses the day count convention the curve was
/// built with, anchored at the curve's reference date.
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    /// Curve reference (calculation) date.
    reference_date: Date,
    /// Day count for the time axis.
    day_count: DayCountConvention,
    /// Pillar times in years, strictly increasing, starting at 0.
    times: Vec<f64>,
    /// Log discount factors at the pillars, starting at 0 (DF = 1).
    log_discounts: Vec<f64>,
    /// Pillar dates matching `times`.
    dates: Vec<Date>,
}

impl DiscountCurve {
    /// Assembles a curve from bootstrapped pillars.
    ///
    /// `pillars` holds (date, discount factor) pairs strictly after the
    /// reference date in strictly increasing date order; the implicit
    /// (reference date, 1.0) node is added here. Ordering and positivity
    /// are the builder's responsibility.
    pub(crate) fn from_pillars(
        reference_date: Date,
        day_count: DayCountConvention,
        pillars: &[(Date, f64)],
    ) -> Self {
        let mut dates = Vec::with_capacity(pillars.len() + 1);
        let mut times = Vec::with_capacity(pillars.len() + 1);
        let mut log_discounts = Vec::with_capacity(pillars.len() + 1);

        dates.push(reference_date);
        times.push(0.0);
        log_discounts.push(0.0);

        for &(date, df) in pillars {
            dates.push(date);
            times.push(year_fraction(day_count, reference_date, date));
            log_discounts.push(df.ln());
        }

        Self {
            reference_date,
            day_count,
            times,
            log_discounts,
            dates,
        }
    }

    /// Returns the curve's reference date.
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the last pillar date.
    pub fn max_date(&self) -> Date {
        *self.dates.last().unwrap_or(&self.reference_date)
    }

    /// Returns the discount factor for a date.
    ///
    /// Dates on or before the reference date discount to 1. Dates past the
    /// last pillar extrapolate along the final log-linear segment.
    pub fn discount_factor(&self, date: Date) -> f64 {
        if date <= self.reference_date {
            return 1.0;
        }
        let t = year_fraction(self.day_count, self.reference_date, date);
        self.log_interpolate(t).exp()
    }

    /// Returns the forward discount factor between two dates.
    ///
    /// `Forward DF = DF(end) / DF(start)`
    pub fn forward_discount_factor(&self, start: Date, end: Date) -> f64 {
        let df_start = self.discount_factor(start);
        if df_start == 0.0 {
            return 0.0;
        }
        self.discount_factor(end) / df_start
    }

    /// Linear interpolation of the log discount factor at time `t`.
    fn log_interpolate(&self, t: f64) -> f64 {
        let n = self.times.len();
        if n == 1 {
            // Only the reference node: flat curve
            return 0.0;
        }

        // Locate the segment; clamp to the last for extrapolation
        let mut hi = n - 1;
        for (i, &pillar_t) in self.times.iter().enumerate().skip(1) {
            if t <= pillar_t {
                hi = i;
                break;
            }
        }
        let lo = hi - 1;

        let (t0, t1) = (self.times[lo], self.times[hi]);
        let (y0, y1) = (self.log_discounts[lo], self.log_discounts[hi]);
        if t1 == t0 {
            return y1;
        }
        y0 + (y1 - y0) * (t - t0) / (t1 - t0)
    }
}

/// Year fraction as `f64` under the given day count.
fn year_fraction(day_count: DayCountConvention, start: Date, end: Date) -> f64 {
    day_count.year_fraction(start, end).to_f64().unwrap_or(0.0)
}

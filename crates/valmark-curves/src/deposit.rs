//! Money market deposit quote.

use rust_decimal::prelude::ToPrimitive;

use valmark_core::prelude::*;

/// A simple money market deposit quote used as a bootstrap instrument.
///
/// Deposits pin the short end of the curve. The present value condition is
///
/// ```text
/// DF(maturity) = DF(spot) / (1 + rate × τ(spot, maturity))
/// ```
///
/// where τ is the year fraction under the quote's day count convention,
/// spot is the calculation date advanced by the settlement lag, and the
/// maturity is the spot date advanced by the deposit tenor under the
/// quote's calendar, adjustment convention, and end-of-month rule.
#[derive(Debug, Clone, Copy)]
pub struct Deposit {
    /// Simple interest rate (e.g. 0.02 for 2%).
    rate: f64,
    /// Deposit tenor.
    tenor: Tenor,
    /// Business days from calculation date to spot.
    settlement_days: i32,
    /// Calendar for settlement and maturity rolls.
    calendar: MarketCalendar,
    /// Adjustment convention for the maturity date.
    convention: BusinessDayConvention,
    /// End-of-month rule for the maturity roll.
    end_of_month: bool,
    /// Day count for the accrual period.
    day_count: DayCountConvention,
}

impl Deposit {
    /// Creates a deposit quote.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rate: f64,
        tenor: Tenor,
        settlement_days: i32,
        calendar: MarketCalendar,
        convention: BusinessDayConvention,
        end_of_month: bool,
        day_count: DayCountConvention,
    ) -> Self {
        Self {
            rate,
            tenor,
            settlement_days,
            calendar,
            convention,
            end_of_month,
            day_count,
        }
    }

    /// Returns the quoted simple rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the deposit tenor.
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Spot date: the calculation date advanced by the settlement lag.
    pub fn spot_date(&self, calc_date: Date) -> Date {
        self.calendar.add_business_days(calc_date, self.settlement_days)
    }

    /// Maturity date: the spot date advanced by the tenor.
    pub fn maturity_date(&self, calc_date: Date) -> ValmarkResult<Date> {
        let spot = self.spot_date(calc_date);
        self.calendar
            .advance(spot, self.tenor, self.convention, self.end_of_month)
    }

    /// Accrual year fraction from spot to maturity.
    pub fn accrual(&self, calc_date: Date) -> ValmarkResult<f64> {
        let spot = self.spot_date(calc_date);
        let maturity = self.maturity_date(calc_date)?;
        Ok(self
            .day_count
            .year_fraction(spot, maturity)
            .to_f64()
            .unwrap_or(0.0))
    }

    /// Discount factor at maturity implied by this quote, given the
    /// discount factor at the spot date.
    pub fn implied_discount(&self, calc_date: Date, spot_df: f64) -> ValmarkResult<f64> {
        let tau = self.accrual(calc_date)?;
        Ok(spot_df / (1.0 + self.rate * tau))
    }
}

//! Leg schedule generation.
//!
//! Generates the ordered period-end dates of a swap leg from its trade
//! parameters. Generation is deterministic: identical inputs always yield
//! the identical sequence.

use chrono::Weekday;

use valmark_core::prelude::*;

use crate::error::{SwapError, SwapResult};

/// Parameters for generating one leg's schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleConfig {
    /// First accrual date.
    pub start: Date,
    /// Final maturity date.
    pub end: Date,
    /// Coupon period length.
    pub tenor: Tenor,
    /// Calendar for business day adjustments.
    pub calendar: MarketCalendar,
    /// Adjustment convention for regular period dates.
    pub convention: BusinessDayConvention,
    /// Adjustment convention for the final (termination) date.
    pub termination_convention: BusinessDayConvention,
    /// Date generation rule (anchoring and snapping policy).
    pub rule: DateGenerationRule,
    /// End-of-month rule: anchor dates at month end stay at month end.
    pub end_of_month: bool,
}

/// An ordered sequence of adjusted period boundary dates, from the leg
/// start to the leg end inclusive.
///
/// A schedule with `n + 1` dates describes `n` accrual periods; period
/// `i` accrues from `dates[i]` to `dates[i + 1]` and pays at
/// `dates[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Generates a schedule from the given configuration.
    ///
    /// The date generation rule determines the anchor: `Backward` steps
    /// the tenor from the end date toward the start, `Forward` from the
    /// start toward the end, with any stub period absorbed at the
    /// non-anchor end. `Zero` produces the single period start-to-end.
    /// Snapping rules (`ThirdWednesday`, the `Twentieth` family) reshape
    /// intermediate dates before adjustment.
    pub fn generate(config: &ScheduleConfig) -> SwapResult<Self> {
        if config.start >= config.end {
            return Err(SwapError::InvalidSchedule {
                message: format!(
                    "start {} must precede end {}",
                    config.start, config.end
                ),
            });
        }

        let zero_length = config.tenor.length() == 0;
        if config.tenor.length() < 0 {
            return Err(SwapError::InvalidSchedule {
                message: format!("negative tenor {}", config.tenor),
            });
        }

        let mut raw = if config.rule == DateGenerationRule::Zero || zero_length {
            vec![config.start, config.end]
        } else {
            match config.rule {
                DateGenerationRule::Forward | DateGenerationRule::ThirdWednesday => {
                    Self::generate_forward(config)?
                }
                // Backward anchoring, shared by the Twentieth/CDS family
                _ => Self::generate_backward(config)?,
            }
        };

        Self::snap(config, &mut raw);
        raw.dedup();

        let mut dates: Vec<Date> = Vec::with_capacity(raw.len());
        let last = raw.len() - 1;
        for (i, date) in raw.into_iter().enumerate() {
            let convention = if i == last {
                config.termination_convention
            } else {
                config.convention
            };
            dates.push(config.calendar.adjust(date, convention));
        }
        dates.dedup();

        if dates.len() < 2 {
            return Err(SwapError::InvalidSchedule {
                message: "schedule collapsed to fewer than two dates".to_string(),
            });
        }

        Ok(Self { dates })
    }

    /// Steps backward from the end date; stub absorbed at the start.
    fn generate_backward(config: &ScheduleConfig) -> SwapResult<Vec<Date>> {
        let mut raw = vec![config.end];
        let mut step = 1;
        loop {
            let date = config.tenor.advance(config.end, -step)?;
            if date <= config.start {
                break;
            }
            raw.push(date);
            step += 1;
        }
        raw.push(config.start);
        raw.reverse();
        Ok(raw)
    }

    /// Steps forward from the start date; stub absorbed at the end.
    fn generate_forward(config: &ScheduleConfig) -> SwapResult<Vec<Date>> {
        let mut raw = vec![config.start];
        let mut step = 1;
        loop {
            let date = config.tenor.advance(config.start, step)?;
            if date >= config.end {
                break;
            }
            raw.push(date);
            step += 1;
        }
        raw.push(config.end);
        Ok(raw)
    }

    /// Applies end-of-month and rule-specific snapping to the stepped
    /// dates, leaving the start and end boundaries untouched.
    fn snap(config: &ScheduleConfig, raw: &mut [Date]) {
        let monthly = matches!(
            config.tenor.unit(),
            TimeUnit::Months | TimeUnit::Years
        );
        let anchor = match config.rule {
            DateGenerationRule::Forward | DateGenerationRule::ThirdWednesday => config.start,
            _ => config.end,
        };
        let eom = config.end_of_month && monthly && anchor.is_end_of_month();

        let last = raw.len() - 1;
        for date in &mut raw[1..last] {
            if eom {
                *date = date.end_of_month();
            }
            match config.rule {
                DateGenerationRule::ThirdWednesday => {
                    if let Ok(imm) = date.nth_weekday_of_month(Weekday::Wed, 3) {
                        *date = imm;
                    }
                }
                rule if rule.is_twentieth_family() => {
                    *date = twentieth_on_or_after(*date, rule.is_imm_month_family());
                }
                _ => {}
            }
        }
    }

    /// Returns the adjusted period boundary dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the number of accrual periods.
    pub fn len(&self) -> usize {
        self.dates.len() - 1
    }

    /// Returns true if the schedule has no periods.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over (accrual start, accrual end) pairs.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the first schedule date.
    pub fn start_date(&self) -> Date {
        self.dates[0]
    }

    /// Returns the last schedule date.
    pub fn end_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}

/// Snaps a date to the 20th of its month, rolling into the next month's
/// 20th when the date is already past it. For the IMM family the month
/// then rolls forward to the next IMM month (Mar/Jun/Sep/Dec).
fn twentieth_on_or_after(date: Date, imm_months: bool) -> Date {
    let mut year = date.year();
    let mut month = date.month();
    if date.day() > 20 {
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    if imm_months {
        while month % 3 != 0 {
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
    }
    // The 20th exists in every month.
    Date::from_ymd(year, month, 20).unwrap_or(date)
}

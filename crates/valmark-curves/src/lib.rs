//! # Valmark Curves
//!
//! Discount curve construction for the Valmark swap valuation library.
//!
//! A curve is bootstrapped from a short strip of simple deposit quotes:
//! each quote pins the discount factor at its maturity, and the curve
//! interpolates log-linearly on discount factors between pillars
//! (equivalent to piecewise-constant forward rates).
//!
//! ## Example
//!
//! ```rust
//! use valmark_core::Date;
//! use valmark_curves::{CurveSpec, DiscountCurveBuilder};
//!
//! let spec = CurveSpec {
//!     curvename: "USD-3M".to_string(),
//!     index_frequency: 3,
//!     index_frequency_type: 2, // months
//!     calendar: "UnitedStates".to_string(),
//!     business_convention: 1, // modified following
//!     dcc: "Actual360".to_string(),
//!     end_of_month_flag: false,
//!     settlement_days: 0,
//!     maturity_period_value: vec![3, 6, 12],
//!     maturity_period_type: vec![2, 2, 2],
//!     rates: vec![0.02, 0.022, 0.025],
//! };
//!
//! let calc_date = Date::from_ymd(2016, 1, 7).unwrap();
//! let curve = DiscountCurveBuilder::new(&spec).build(calc_date).unwrap();
//!
//! let df = curve.discount_factor(Date::from_ymd(2016, 7, 7).unwrap());
//! assert!(df > 0.0 && df < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::similar_names)]

mod bootstrap;
mod deposit;
mod discount;
mod error;
mod spec;

pub use bootstrap::DiscountCurveBuilder;
pub use deposit::Deposit;
pub use discount::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use spec::CurveSpec;

//! Core value types for date arithmetic and trade conventions.

mod date;
mod rules;
mod tenor;

pub use date::Date;
pub use rules::{DateGenerationRule, SwapType};
pub use tenor::{Tenor, TimeUnit};

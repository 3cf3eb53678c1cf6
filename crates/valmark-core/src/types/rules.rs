//! Date generation rules and swap direction flags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValmarkError, ValmarkResult};

/// Policy for laying out periodic schedule dates between a start and an
/// end date.
///
/// Wire codes preserve the original feed's numbering: 0 = Backward,
/// 1 = Forward, 2 = Zero, 3 = ThirdWednesday, 4 = Twentieth,
/// 5 = TwentiethIMM, 6 = OldCDS, 7 = CDS, 8 = CDS2015.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateGenerationRule {
    /// Anchor at the end date and step backward; stub absorbed at the start.
    Backward,
    /// Anchor at the start date and step forward; stub absorbed at the end.
    Forward,
    /// No intermediate dates: a single period from start to end.
    Zero,
    /// Intermediate dates snap to the third Wednesday of their month.
    ThirdWednesday,
    /// Generated dates snap to the 20th of their month.
    Twentieth,
    /// Generated dates snap to the 20th of IMM months (Mar/Jun/Sep/Dec).
    TwentiethIMM,
    /// Pre-2009 CDS roll rule; treated as 20th-of-IMM-month.
    OldCDS,
    /// Standard CDS roll rule; treated as 20th-of-IMM-month.
    CDS,
    /// Post-2015 CDS roll rule; treated as 20th-of-IMM-month.
    CDS2015,
}

impl DateGenerationRule {
    /// Resolves a wire code to a date generation rule.
    ///
    /// Unknown codes fail explicitly; there is no default rule.
    pub fn from_code(code: i32) -> ValmarkResult<Self> {
        match code {
            0 => Ok(DateGenerationRule::Backward),
            1 => Ok(DateGenerationRule::Forward),
            2 => Ok(DateGenerationRule::Zero),
            3 => Ok(DateGenerationRule::ThirdWednesday),
            4 => Ok(DateGenerationRule::Twentieth),
            5 => Ok(DateGenerationRule::TwentiethIMM),
            6 => Ok(DateGenerationRule::OldCDS),
            7 => Ok(DateGenerationRule::CDS),
            8 => Ok(DateGenerationRule::CDS2015),
            _ => Err(ValmarkError::UnsupportedDateGeneration { code }),
        }
    }

    /// Returns the wire code for this rule.
    pub fn code(&self) -> i32 {
        match self {
            DateGenerationRule::Backward => 0,
            DateGenerationRule::Forward => 1,
            DateGenerationRule::Zero => 2,
            DateGenerationRule::ThirdWednesday => 3,
            DateGenerationRule::Twentieth => 4,
            DateGenerationRule::TwentiethIMM => 5,
            DateGenerationRule::OldCDS => 6,
            DateGenerationRule::CDS => 7,
            DateGenerationRule::CDS2015 => 8,
        }
    }

    /// Returns true for rules that snap generated dates to the 20th.
    pub fn is_twentieth_family(&self) -> bool {
        matches!(
            self,
            DateGenerationRule::Twentieth
                | DateGenerationRule::TwentiethIMM
                | DateGenerationRule::OldCDS
                | DateGenerationRule::CDS
                | DateGenerationRule::CDS2015
        )
    }

    /// Returns true for rules restricted to IMM months (Mar/Jun/Sep/Dec).
    pub fn is_imm_month_family(&self) -> bool {
        matches!(
            self,
            DateGenerationRule::TwentiethIMM
                | DateGenerationRule::OldCDS
                | DateGenerationRule::CDS
                | DateGenerationRule::CDS2015
        )
    }
}

impl fmt::Display for DateGenerationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateGenerationRule::Backward => "Backward",
            DateGenerationRule::Forward => "Forward",
            DateGenerationRule::Zero => "Zero",
            DateGenerationRule::ThirdWednesday => "ThirdWednesday",
            DateGenerationRule::Twentieth => "Twentieth",
            DateGenerationRule::TwentiethIMM => "TwentiethIMM",
            DateGenerationRule::OldCDS => "OldCDS",
            DateGenerationRule::CDS => "CDS",
            DateGenerationRule::CDS2015 => "CDS2015",
        };
        write!(f, "{name}")
    }
}

/// Swap direction with respect to the fixed leg.
///
/// The wire flag follows swap market convention: `+1` pays fixed (payer
/// swap), `-1` receives fixed (receiver swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    /// Pay fixed, receive floating.
    Payer,
    /// Receive fixed, pay floating.
    Receiver,
}

impl SwapType {
    /// Resolves a wire payer/receiver flag.
    pub fn from_code(code: i32) -> ValmarkResult<Self> {
        match code {
            1 => Ok(SwapType::Payer),
            -1 => Ok(SwapType::Receiver),
            _ => Err(ValmarkError::UnsupportedSwapType { code }),
        }
    }

    /// Returns the wire flag for this direction.
    pub fn code(&self) -> i32 {
        match self {
            SwapType::Payer => 1,
            SwapType::Receiver => -1,
        }
    }

    /// Sign applied to (floating - fixed) when netting leg values.
    pub fn net_sign(&self) -> f64 {
        match self {
            SwapType::Payer => 1.0,
            SwapType::Receiver => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_codes_roundtrip() {
        for code in 0..9 {
            let rule = DateGenerationRule::from_code(code).unwrap();
            assert_eq!(rule.code(), code);
        }
        assert!(DateGenerationRule::from_code(9).is_err());
        assert!(DateGenerationRule::from_code(-1).is_err());
    }

    #[test]
    fn test_rule_families() {
        assert!(DateGenerationRule::CDS.is_twentieth_family());
        assert!(DateGenerationRule::CDS.is_imm_month_family());
        assert!(DateGenerationRule::Twentieth.is_twentieth_family());
        assert!(!DateGenerationRule::Twentieth.is_imm_month_family());
        assert!(!DateGenerationRule::Backward.is_twentieth_family());
    }

    #[test]
    fn test_swap_type() {
        assert_eq!(SwapType::from_code(1).unwrap(), SwapType::Payer);
        assert_eq!(SwapType::from_code(-1).unwrap(), SwapType::Receiver);
        assert!(SwapType::from_code(0).is_err());
        assert_eq!(SwapType::Payer.net_sign(), 1.0);
        assert_eq!(SwapType::Receiver.net_sign(), -1.0);
    }
}

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rule applied by the simplifier.
///
/// Each variant is named after the identity it applies; [`fmt::Display`] prints that identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    FoldConstants,

    AddZero,
    SubtractZero,
    SubtractFromZero,
    SubtractSelf,
    AddNegative,
    SubtractNegative,

    MultiplyOne,
    MultiplyZero,
    ConstantFirst,
    CombineConstantFactors,
    MultiplyNegativeOne,

    DivideOne,
    DivideZero,
    DivideSelf,
    DivideConstantFactor,
    MultiplyFraction,

    PowerOne,
    PowerZero,
    OnePower,
    PowerOfPower,

    DoubleNegation,
    NegateConstantFactor,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identity = match self {
            Self::FoldConstants => "evaluate operations on numbers",
            Self::AddZero => "a + 0 = a",
            Self::SubtractZero => "a - 0 = a",
            Self::SubtractFromZero => "0 - a = -a",
            Self::SubtractSelf => "a - a = 0",
            Self::AddNegative => "a + (-b) = a - b",
            Self::SubtractNegative => "a - (-b) = a + b",
            Self::MultiplyOne => "1 * a = a",
            Self::MultiplyZero => "0 * a = 0",
            Self::ConstantFirst => "a * c = c * a",
            Self::CombineConstantFactors => "c1 * (c2 * a) = (c1 * c2) * a",
            Self::MultiplyNegativeOne => "(-1) * a = -a",
            Self::DivideOne => "a / 1 = a",
            Self::DivideZero => "0 / a = 0",
            Self::DivideSelf => "a / a = 1",
            Self::DivideConstantFactor => "(c1 * a) / c2 = (c1 / c2) * a",
            Self::MultiplyFraction => "c1 * (a / c2) = (c1 / c2) * a",
            Self::PowerOne => "a^1 = a",
            Self::PowerZero => "a^0 = 1",
            Self::OnePower => "1^a = 1",
            Self::PowerOfPower => "(a^b)^c = a^(b * c)",
            Self::DoubleNegation => "-(-a) = a",
            Self::NegateConstantFactor => "-(c * a) = (-c) * a",
        };
        write!(f, "{}", identity)
    }
}

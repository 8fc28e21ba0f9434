use std::fmt::Display;

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::Zero as _;
use strum_macros::EnumIter;

/// The four binary operators an expression can contain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Gets the character the operator is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Applies the operator to the accumulated result `lhs` and the operand `rhs`.
    ///
    /// Division is floor division, the quotient is rounded towards negative infinity.
    ///
    /// Returns [`None`] if the operator is [`Operator::Divide`] and `rhs` is zero.
    #[must_use]
    pub fn apply(self, lhs: &BigInt, rhs: &BigInt) -> Option<BigInt> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs.is_zero() => None,
            Self::Divide => Some(lhs.div_floor(rhs)),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//! Errors that can occur while folding an operator into the accumulated result.

use std::fmt::Display;

use num_bigint::BigInt;

use crate::base::{
    log::{Message, Severity, SourceCodeDisplay},
    source::Span,
};

/// Errors that can occur while applying an operator.
#[allow(clippy::module_name_repetitions, missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ArithmeticError {
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),
}

/// The divisor of a division is zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DivisionByZero {
    /// The accumulated result that was about to be divided.
    pub dividend: BigInt,

    /// Span of the divisor.
    pub span: Span,
}

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("division by zero, cannot divide {} by 0", self.dividend);
        write!(f, "{}", Message::new(Severity::Error, message))?;

        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(&self.span, Option::<u8>::None)
        )
    }
}

impl std::error::Error for DivisionByZero {}
